//! Ayu color theme and styling functions for fleetdesk CLI output.
//!
//! Uses the Ayu Dark color palette for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Design principles:
//! - Actionable states get strong color (running, broken); ready is cool blue
//! - Small Unicode symbols for icons, NOT emoji blobs
//! - Dangling references and timestamps render muted

use fleetdesk_core::state::VehicleState;
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

// Core semantic colors
const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// Vehicle state colors
const STATE_READY: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - blue
const STATE_PREPARING: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - yellow
const STATE_RUNNING: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - green
const STATE_MAINTENANCE: (u8, u8, u8) = (0xff, 0x8f, 0x40); // #ff8f40 - orange
const STATE_BROKEN: (u8, u8, u8) = (0xf2, 0x6d, 0x78); // #f26d78 - red

// ---------------------------------------------------------------------------
// State icons -- consistent semantic indicators
// ---------------------------------------------------------------------------

/// Ready state icon (hollow circle -- parked and available).
pub const STATE_ICON_READY: &str = "\u{25CB}"; // ○
/// Preparing state icon (half-filled circle -- departure imminent).
pub const STATE_ICON_PREPARING: &str = "\u{25D0}"; // ◐
/// Running state icon (filled circle -- in service).
pub const STATE_ICON_RUNNING: &str = "\u{25CF}"; // ●
/// Maintenance state icon (gear -- in the workshop).
pub const STATE_ICON_MAINTENANCE: &str = "\u{2699}"; // ⚙
/// Broken state icon (cross -- out of service).
pub const STATE_ICON_BROKEN: &str = "\u{2716}"; // ✖

// General icons
pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const ICON_INFO: &str = "\u{2139}"; // ℹ

// Separators
pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";
pub const SEPARATOR_HEAVY: &str = "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}";

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

/// Applies truecolor foreground + bold to a string.
fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with pass (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Renders text with warning (yellow) styling.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with accent (blue) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a category header in uppercase with accent color and bold.
pub fn render_category(s: &str) -> String {
    let upper = s.to_uppercase();
    color_bold_str(&upper, ACCENT)
}

/// Renders the light separator line in muted color.
pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

// ---------------------------------------------------------------------------
// Icon renderers
// ---------------------------------------------------------------------------

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

pub fn render_info_icon() -> String {
    color_str(ICON_INFO, ACCENT)
}

// ---------------------------------------------------------------------------
// Vehicle state rendering
// ---------------------------------------------------------------------------

/// Returns the appropriate icon for a vehicle state.
/// This is the canonical source for state icon rendering.
pub fn render_state_icon(state: VehicleState) -> &'static str {
    match state {
        VehicleState::Ready => STATE_ICON_READY,
        VehicleState::Preparing => STATE_ICON_PREPARING,
        VehicleState::Running => STATE_ICON_RUNNING,
        VehicleState::Maintenance => STATE_ICON_MAINTENANCE,
        VehicleState::Broken => STATE_ICON_BROKEN,
    }
}

/// Returns the colored state icon string.
pub fn render_state_icon_colored(state: VehicleState) -> String {
    let icon = render_state_icon(state);
    match state {
        VehicleState::Ready => color_str(icon, STATE_READY),
        VehicleState::Preparing => color_str(icon, STATE_PREPARING),
        VehicleState::Running => color_str(icon, STATE_RUNNING),
        VehicleState::Maintenance => color_str(icon, STATE_MAINTENANCE),
        VehicleState::Broken => color_str(icon, STATE_BROKEN),
    }
}

/// Renders a vehicle state string with semantic coloring.
/// Broken is bold red so it stands out in a full fleet listing.
pub fn render_state(state: VehicleState) -> String {
    let s = state.as_str();
    match state {
        VehicleState::Ready => color_str(s, STATE_READY),
        VehicleState::Preparing => color_str(s, STATE_PREPARING),
        VehicleState::Running => color_str(s, STATE_RUNNING),
        VehicleState::Maintenance => color_str(s, STATE_MAINTENANCE),
        VehicleState::Broken => color_bold_str(s, STATE_BROKEN),
    }
}

/// Renders a compact state badge: colored icon followed by the state name.
/// Format: `● running`.
pub fn render_state_badge(state: VehicleState) -> String {
    format!("{} {}", render_state_icon_colored(state), render_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_icon_returns_correct_icons() {
        assert_eq!(render_state_icon(VehicleState::Ready), STATE_ICON_READY);
        assert_eq!(
            render_state_icon(VehicleState::Preparing),
            STATE_ICON_PREPARING
        );
        assert_eq!(render_state_icon(VehicleState::Running), STATE_ICON_RUNNING);
        assert_eq!(
            render_state_icon(VehicleState::Maintenance),
            STATE_ICON_MAINTENANCE
        );
        assert_eq!(render_state_icon(VehicleState::Broken), STATE_ICON_BROKEN);
    }

    #[test]
    fn render_state_contains_state_name() {
        // In tests, NO_COLOR may or may not be set; just verify the string
        // contains the label.
        for state in VehicleState::ALL {
            let rendered = render_state(state);
            assert!(rendered.contains(state.as_str()));
        }
    }

    #[test]
    fn render_state_badge_contains_icon_and_name() {
        let badge = render_state_badge(VehicleState::Running);
        assert!(badge.contains(STATE_ICON_RUNNING));
        assert!(badge.contains("running"));
    }
}
