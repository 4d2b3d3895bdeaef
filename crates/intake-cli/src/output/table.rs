#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width);
                if options.color {
                    colorize(&truncated, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Wrap outcome words in ANSI color; padding stays outside the escape codes.
fn colorize(value: &str, padded: String) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "true" | "valid" | "accepted" => "32",
        "submitting" | "pending" => "33",
        "false" | "invalid" | "failed" | "rejected" => "31",
        _ => return padded,
    };
    let trailing = &padded[value.len()..];
    format!("\u{1b}[{code}m{value}\u{1b}[0m{trailing}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["email".to_string(), "short".to_string()],
            vec!["projectStartDate".to_string(), "a longer message".to_string()],
        ];
        let table = render_entity_table(&["field", "message"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        let column = lines[0].find("message").unwrap();
        assert_eq!(lines[2].find("short"), Some(column));
        assert_eq!(lines[3].find("a longer"), Some(column));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "message".to_string(),
            "Project start date must be today or later".to_string(),
        ]];
        let table = render_entity_table(
            &["field", "value"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.chars().count() <= 30);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn color_marks_outcome_words_only() {
        let rows = vec![vec!["success".to_string(), "false".to_string()]];
        let table = render_entity_table(
            &["field", "value"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mfalse\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[31msuccess"));
    }
}
