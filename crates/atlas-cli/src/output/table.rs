use std::io::IsTerminal;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    pub const PLAIN: Self = Self {
        max_width: None,
        color: false,
    };

    /// Options for tables printed to stdout: width from `COLUMNS` (ignored
    /// below 40), color per `--color` with `auto` honoring `NO_COLOR`.
    #[must_use]
    pub fn for_stdout(flags: &GlobalFlags) -> Self {
        let color = match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !flags.quiet
                    && std::io::stdout().is_terminal()
                    && std::env::var_os("NO_COLOR").is_none()
            }
        };
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width, color }
    }
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table: header line, dashed divider, one line per row.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, None))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let color = if options.color { color_for(&text) } else { None };
                pad(&text, *width, color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, color: Option<&str>) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m{fill}"),
        None => format!("{value}{fill}"),
    }
}

fn color_for(value: &str) -> Option<&'static str> {
    match value {
        "true" | "added" => Some("32"),
        "false" | "removed" => Some("31"),
        _ if value.starts_with('/') => Some("36"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions::PLAIN;

    fn flags(color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            color,
            quiet: false,
            data_dir: None,
        }
    }

    #[test]
    fn explicit_color_mode_wins() {
        assert!(TableOptions::for_stdout(&flags(ColorMode::Always)).color);
        assert!(!TableOptions::for_stdout(&flags(ColorMode::Never)).color);
    }

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["/about".to_string(), "About".to_string()],
            vec!["/audio-processing".to_string(), "AudioProcessing".to_string()],
        ];
        let table = render(&["path", "name"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let name_column = lines[0].find("name").unwrap();
        assert_eq!(lines[2].find("About"), Some(name_column));
        assert_eq!(lines[3].find("AudioProcessing"), Some(name_column));
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec!["x".repeat(80), "short".to_string()]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render(&["payload", "name"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.contains('…'));
    }

    #[test]
    fn colors_membership_cells() {
        let rows = vec![vec!["true".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render(&["favorite"], &rows, options);
        assert!(table.contains("\u{1b}[32mtrue\u{1b}[0m"));
    }
}
