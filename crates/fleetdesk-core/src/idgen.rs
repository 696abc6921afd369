//! Business-code generation.
//!
//! Schedules and tickets get sequential prefixed codes (`LC001`, `VE001`);
//! feedback and maintenance records get plain numeric ids rendered with a
//! prefix for display. Codes are derived from the highest existing value so
//! deleting records never re-issues a code that is still referenced.

/// Prefix for schedule codes.
pub const SCHEDULE_PREFIX: &str = "LC";
/// Prefix for ticket codes.
pub const TICKET_PREFIX: &str = "VE";
/// Display prefix for feedback ids.
pub const FEEDBACK_PREFIX: &str = "PH";
/// Display prefix for maintenance ids.
pub const MAINTENANCE_PREFIX: &str = "BT";

/// Next sequential code for a prefixed series.
///
/// Scans existing codes for the prefix, takes the highest numeric suffix and
/// adds one. Codes with a foreign prefix or a non-numeric suffix are ignored.
pub fn next_code<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(|code| code.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", prefix, max + 1)
}

/// Next numeric id for a series (max + 1, starting at 1).
pub fn next_numeric_id<I>(existing: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    existing.into_iter().max().map_or(1, |max| max + 1)
}

/// Renders a numeric id with its display prefix, zero-padded to three digits.
pub fn display_code(prefix: &str, id: u32) -> String {
    format!("{}{:03}", prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_code_in_empty_series() {
        assert_eq!(next_code(SCHEDULE_PREFIX, []), "LC001");
    }

    #[test]
    fn next_code_follows_highest() {
        let existing = ["LC001", "LC003", "LC002"];
        assert_eq!(next_code(SCHEDULE_PREFIX, existing), "LC004");
    }

    #[test]
    fn next_code_survives_deletions() {
        // LC002 deleted; the next code must not collide with LC003.
        let existing = ["LC001", "LC003"];
        assert_eq!(next_code(SCHEDULE_PREFIX, existing), "LC004");
    }

    #[test]
    fn next_code_ignores_foreign_prefixes() {
        let existing = ["VE009", "LC001"];
        assert_eq!(next_code(SCHEDULE_PREFIX, existing), "LC002");
    }

    #[test]
    fn next_code_ignores_malformed_suffixes() {
        let existing = ["LCxyz", "LC002"];
        assert_eq!(next_code(SCHEDULE_PREFIX, existing), "LC003");
    }

    #[test]
    fn code_widens_past_three_digits() {
        let existing = ["VE999"];
        assert_eq!(next_code(TICKET_PREFIX, existing), "VE1000");
    }

    #[test]
    fn numeric_id_starts_at_one() {
        assert_eq!(next_numeric_id([]), 1);
    }

    #[test]
    fn numeric_id_is_max_plus_one() {
        assert_eq!(next_numeric_id([4, 1, 9]), 10);
    }

    #[test]
    fn display_code_pads_to_three() {
        assert_eq!(display_code(FEEDBACK_PREFIX, 7), "PH007");
        assert_eq!(display_code(MAINTENANCE_PREFIX, 123), "BT123");
        assert_eq!(display_code(MAINTENANCE_PREFIX, 1234), "BT1234");
    }
}
