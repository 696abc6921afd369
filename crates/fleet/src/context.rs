//! Runtime context shared by all commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fleetdesk_config::data_dir::find_data_dir;
use fleetdesk_store::catalog::Catalog;
use fleetdesk_store::file::FileStore;

use crate::cli::GlobalArgs;

/// Carries the global flags plus the resolved data directory so that
/// command modules never touch `GlobalArgs` directly.
pub struct RuntimeContext {
    /// Explicit data directory (`--data-dir` flag or `FLEETDESK_DIR`).
    pub data_dir: Option<String>,
    /// Emit machine-readable JSON instead of human output.
    pub json: bool,
    /// Verbose diagnostics on stderr.
    pub verbose: bool,
    /// Suppress informational chatter.
    pub quiet: bool,
}

impl RuntimeContext {
    pub fn from_global_args(args: &GlobalArgs) -> Self {
        Self {
            data_dir: args.data_dir.clone(),
            json: args.json,
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }

    /// Locate the data directory without creating it.
    ///
    /// An explicit `--data-dir` always wins and is taken verbatim.
    /// Otherwise walk up from the current directory looking for a
    /// `.fleetdesk` directory.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(PathBuf::from(dir));
        }
        find_data_dir(Path::new("."))
    }

    /// Like [`resolve_data_dir`](Self::resolve_data_dir) but an error
    /// when nothing is found.
    pub fn require_data_dir(&self) -> Result<PathBuf> {
        self.resolve_data_dir()
            .context("no data directory found. Run 'fleet init' to create one")
    }

    /// Open the persistent catalog backing all commands.
    pub fn open_catalog(&self) -> Result<Catalog<FileStore>> {
        let dir = self.require_data_dir()?;
        let store = FileStore::open(&dir)
            .with_context(|| format!("failed to open data directory {}", dir.display()))?;
        Ok(Catalog::new(store))
    }
}
