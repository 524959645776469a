//! Column-aligned plain-text rendering.

use unicode_width::UnicodeWidthStr;

use crate::table::{Row, Table};

/// Separator placed between adjacent columns.
const COLUMN_GAP: &str = "  ";

/// Renders the header and visible rows as aligned columns.
///
/// Columns are padded to the widest cell among the rendered rows, measured
/// in terminal display width. A summary line follows the rows.
#[must_use]
pub fn render_text(table: &Table) -> String {
    let rows: Vec<&Row> = std::iter::once(table.header())
        .chain(table.visible_rows())
        .collect();
    let widths = column_widths(&rows);

    let mut output = String::new();
    for row in &rows {
        output.push_str(&format_line(row, &widths));
        output.push('\n');
    }

    let shown = rows.len().saturating_sub(1);
    output.push_str(&format!("{shown} of {} rows shown\n", table.len()));
    output
}

fn column_widths(rows: &[&Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (index, cell) in row.cells().iter().enumerate() {
            let width = cell.text().width();
            match widths.get_mut(index) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

fn format_line(row: &Row, widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, cell) in row.cells().iter().enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell.text());
        let target = widths.get(index).copied().unwrap_or_default();
        let padding = target.saturating_sub(cell.text().width());
        line.extend(std::iter::repeat_n(' ', padding));
    }
    line.truncate(line.trim_end().len());
    line
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::table::filter_rows;

    #[fixture]
    fn quakes() -> Table {
        Table::new(
            ["Location", "Magnitude", "Date"].into_iter().collect(),
            vec![
                ["Noto Peninsula", "7.5", "2024-01-01"].into_iter().collect(),
                ["Tonga", "6", "2024-02-14"].into_iter().collect(),
                ["Hualien", "7.4", "2024-04-03"].into_iter().collect(),
            ],
        )
    }

    #[rstest]
    fn renders_aligned_columns(quakes: Table) {
        assert_snapshot!(render_text(&quakes), @r"
        Location        Magnitude  Date
        Noto Peninsula  7.5        2024-01-01
        Tonga           6          2024-02-14
        Hualien         7.4        2024-04-03
        3 of 3 rows shown
        ");
    }

    #[rstest]
    fn hidden_rows_are_omitted_and_counted(mut quakes: Table) {
        filter_rows(&mut quakes, "7.");
        assert_snapshot!(render_text(&quakes), @r"
        Location        Magnitude  Date
        Noto Peninsula  7.5        2024-01-01
        Hualien         7.4        2024-04-03
        2 of 3 rows shown
        ");
    }

    #[rstest]
    fn wide_characters_are_padded_by_display_width() {
        let table = Table::new(
            ["Place", "M"].into_iter().collect(),
            vec![
                ["能登", "7.5"].into_iter().collect(),
                ["Fiji", "5"].into_iter().collect(),
            ],
        );
        let rendered = render_text(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["Place  M", "能登   7.5", "Fiji   5", "2 of 2 rows shown"]);
    }

    #[rstest]
    fn empty_table_renders_header_only() {
        let table = Table::new(["Location"].into_iter().collect(), Vec::new());
        assert_eq!(render_text(&table), "Location\n0 of 0 rows shown\n");
    }
}
