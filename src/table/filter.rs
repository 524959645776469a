//! Free-text row filtering.
//!
//! A data row stays visible when any of its cells contains the query as a
//! case-insensitive substring. Filtering only touches visibility flags; row
//! order and the header are never changed.

use super::{Row, Table, Visibility};

/// Counts of data rows left shown and hidden by a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    /// Data rows that matched the query.
    pub visible: usize,
    /// Data rows that did not match.
    pub hidden: usize,
}

/// Returns true if `text` contains `folded_query` once uppercased.
///
/// `folded_query` must already be uppercased; [`filter_rows`] folds the query
/// once per pass rather than once per cell.
#[must_use]
pub fn cell_matches(text: &str, folded_query: &str) -> bool {
    text.to_uppercase().contains(folded_query)
}

/// Applies `query` to every data row of `table`.
///
/// Each row is hidden first and shown again as soon as one cell matches, so
/// the remaining cells are never scanned. A row without cells stays hidden.
/// An empty query matches every cell, which shows every non-empty row.
pub fn filter_rows(table: &mut Table, query: &str) -> FilterSummary {
    let folded_query = query.to_uppercase();
    let mut summary = FilterSummary::default();

    for row in table.rows_mut() {
        let visibility = evaluate_row(row, &folded_query);
        row.set_visibility(visibility);
        match visibility {
            Visibility::Shown => summary.visible += 1,
            Visibility::Hidden => summary.hidden += 1,
        }
    }

    tracing::debug!(
        query,
        visible = summary.visible,
        hidden = summary.hidden,
        "applied row filter"
    );
    summary
}

fn evaluate_row(row: &Row, folded_query: &str) -> Visibility {
    if row
        .cells()
        .iter()
        .any(|cell| cell_matches(cell.text(), folded_query))
    {
        Visibility::Shown
    } else {
        Visibility::Hidden
    }
}
