//! `fleet settings` -- show or change console settings.
//!
//! Settings live in `settings.yaml` inside the data directory and are
//! addressed with dotted keys (`company.name`, `display.currency`, ...).

use anyhow::Result;

use fleetdesk_config::settings::{Settings, load_settings, save_settings};

use crate::cli::{SettingsArgs, SettingsCommands, SettingsSetArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `fleet settings` command.
pub fn run(ctx: &RuntimeContext, args: &SettingsArgs) -> Result<()> {
    let data_dir = ctx.require_data_dir()?;

    match &args.command {
        SettingsCommands::Show => {
            let settings = load_settings(&data_dir)?;
            if ctx.json {
                output_json(&settings);
            } else {
                print!("{}", serde_yaml::to_string(&settings)?);
            }
            Ok(())
        }
        SettingsCommands::Set(SettingsSetArgs { key, value }) => {
            let mut settings = load_settings(&data_dir)?;
            settings.set_value(key, value)?;
            save_settings(&data_dir, &settings)?;
            if ctx.json {
                output_json(&settings);
            } else if !ctx.quiet {
                println!("Set {} = {}", key, value);
            }
            Ok(())
        }
        SettingsCommands::Reset => {
            let settings = Settings::default();
            save_settings(&data_dir, &settings)?;
            if ctx.json {
                output_json(&settings);
            } else if !ctx.quiet {
                println!("Settings reset to defaults.");
            }
            Ok(())
        }
    }
}
