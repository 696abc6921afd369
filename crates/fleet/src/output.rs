//! Output helpers shared by the command modules.
//!
//! Human output goes through [`output_table`] and the small formatting
//! helpers here; `--json` output goes through [`output_json`].

use std::io::Write;

use serde::Serialize;

/// Print a value as pretty JSON on stdout.
///
/// Broken pipes are ignored so that `fleet ... --json | head` does not
/// turn into an error.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            let _ = writeln!(lock, "{}", s);
        }
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// Render an aligned plain-text table with a dashed separator under the
/// header row. Empty when there are no rows.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header.trim_end().to_string());

    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Print an aligned table on stdout. Does nothing when there are no rows.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    let table = render_table(headers, rows);
    if !table.is_empty() {
        println!("{}", table);
    }
}

/// Format a monetary amount with thousands separators, e.g. `2,500,000`.
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Render a reference code together with its resolved display name,
/// falling back to the bare code when the target no longer exists.
pub fn code_with_name(code: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}

/// Placeholder for empty optional cells.
pub fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_amount_inserts_thousands_separators() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(150_000), "150,000");
        assert_eq!(format_amount(2_500_000), "2,500,000");
    }

    #[test]
    fn format_amount_handles_negative_values() {
        assert_eq!(format_amount(-1), "-1");
        assert_eq!(format_amount(-1_234_567), "-1,234,567");
    }

    #[test]
    fn code_with_name_falls_back_to_bare_code() {
        assert_eq!(code_with_name("R001", Some("Central - Airport")), "R001 (Central - Airport)");
        assert_eq!(code_with_name("R999", None), "R999");
    }

    #[test]
    fn dash_if_empty_replaces_empty_strings() {
        assert_eq!(dash_if_empty(""), "-");
        assert_eq!(dash_if_empty("S001"), "S001");
    }

    #[test]
    fn render_table_aligns_columns() {
        let table = render_table(
            &["CODE", "NAME"],
            &[
                vec!["R1".to_string(), "Airport".to_string()],
                vec!["R002".to_string(), "Harbor".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "CODE  NAME");
        assert_eq!(lines[1], "----  -------");
        assert_eq!(lines[2], "R1    Airport");
        assert_eq!(lines[3], "R002  Harbor");
    }

    #[test]
    fn render_table_is_empty_without_rows() {
        assert_eq!(render_table(&["A"], &[]), "");
    }
}
