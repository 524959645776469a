//! In-memory table model shared by the filter, the sorter, and the renderers.
//!
//! A [`Table`] owns a header [`Row`] and an ordered sequence of data rows.
//! Cell text is the single source of truth: numeric-ness is re-derived from
//! the text on every comparison and never cached. The header is held apart
//! from the data rows so that filtering and sorting cannot reach it.

pub mod filter;
pub mod sort;
pub mod source;

use serde::Serialize;

pub use filter::{FilterSummary, cell_matches, filter_rows};
pub use sort::{
    SortDirection, SortOutcome, SortSession, compare_cells, is_out_of_order, parse_numeric,
    sort_rows,
};
pub use source::{QuakeRecord, RECORD_COLUMNS, TableSource, load_table, parse_table};

/// A single table cell holding its displayed text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Cell {
    text: String,
}

impl Cell {
    /// Creates a cell from its displayed text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Whether a data row is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// The row is displayed.
    #[default]
    Shown,
    /// The row is hidden by the active filter.
    Hidden,
}

/// An ordered sequence of cells plus a visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Row {
    cells: Vec<Cell>,
    visibility: Visibility,
}

impl Row {
    /// Creates a shown row from its cells.
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            visibility: Visibility::Shown,
        }
    }

    /// Returns the row's cells in column order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `column`, if the row is that wide.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Returns the current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true when the row is displayed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Shown)
    }

    pub(crate) const fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from a header and its data rows.
    #[must_use]
    pub const fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Returns the header row.
    #[must_use]
    pub const fn header(&self) -> &Row {
        &self.header
    }

    /// Returns all data rows in their current order, hidden ones included.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns an iterator over the data rows that are currently shown.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_visible())
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the text of one column across all data rows, in row order.
    ///
    /// Rows narrower than `column` contribute nothing.
    #[must_use]
    pub fn column_texts(&self, column: usize) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.cell(column).map(Cell::text))
            .collect()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
}
