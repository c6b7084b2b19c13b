//! Terminal output utilities: color detection, status markers, table rendering.

use std::io::IsTerminal;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Check if `stream` is a terminal that supports color output.
pub fn supports_color(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
        && std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// One result line: a pass/fail marker, the subject, and an optional reason.
pub fn status_line(ok: bool, subject: &str, reason: Option<&str>, color: bool) -> String {
    let marker = match (ok, color) {
        (true, true) => format!("{GREEN}{BOLD}✓{RESET}"),
        (false, true) => format!("{RED}{BOLD}✗{RESET}"),
        (true, false) => "OK:".to_string(),
        (false, false) => "INVALID:".to_string(),
    };
    match (reason, color) {
        (Some(reason), true) => format!("{marker} {subject} {DIM}({reason}){RESET}"),
        (Some(reason), false) => format!("{marker} {subject} ({reason})"),
        (None, _) => format!("{marker} {subject}"),
    }
}

/// Column alignment.
pub enum Align {
    Left,
    Right,
}

/// A table column definition.
pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self { header: header.into(), align: Align::Left }
    }
    pub fn right(header: impl Into<String>) -> Self {
        Self { header: header.into(), align: Align::Right }
    }
}

/// Render a table with given columns and rows. Headers are bold when `color` is set.
pub fn render_table(columns: &[Column], rows: &[Vec<String>], color: bool) -> String {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| strip_ansi(&c.header).chars().count())
        .collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(strip_ansi(cell).chars().count());
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, width)| pad_cell(&col.header, *width, &col.align))
        .collect();
    let header = header_cells.join("  ");
    if color {
        out.push_str(&format!("{BOLD}{header}{RESET}\n"));
    } else {
        out.push_str(&format!("{header}\n"));
    }

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", sep.join("  ")));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (col, width))| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                pad_cell(cell, *width, &col.align)
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

fn pad_cell(s: &str, width: usize, align: &Align) -> String {
    let pad = width.saturating_sub(strip_ansi(s).chars().count());
    match align {
        Align::Left => format!("{s}{}", " ".repeat(pad)),
        Align::Right => format!("{}{s}", " ".repeat(pad)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ansi() {
        let colored = format!("{GREEN}hello{RESET}");
        assert_eq!(strip_ansi(&colored), "hello");
    }

    #[test]
    fn no_color_when_not_a_terminal() {
        let file = tempfile::tempfile().unwrap();
        assert!(!supports_color(&file));
    }

    #[test]
    fn plain_status_lines() {
        assert_eq!(status_line(true, "* * * * *", None, false), "OK: * * * * *");
        assert_eq!(
            status_line(false, "60 * * * *", Some("invalid minute field '60'"), false),
            "INVALID: 60 * * * * (invalid minute field '60')"
        );
    }

    #[test]
    fn colored_status_line_has_same_text() {
        let line = status_line(true, "* * * * *", None, true);
        assert_eq!(strip_ansi(&line), "✓ * * * * *");
    }

    #[test]
    fn renders_aligned_table() {
        let cols = vec![Column::left("Field"), Column::right("Max")];
        let rows = vec![
            vec!["minute".to_string(), "59".to_string()],
            vec!["day-of-week".to_string(), "7".to_string()],
        ];
        let table = render_table(&cols, &rows, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Field        Max");
        assert_eq!(lines[1], "-----------  ---");
        assert_eq!(lines[2], "minute        59");
        assert_eq!(lines[3], "day-of-week    7");
    }
}
