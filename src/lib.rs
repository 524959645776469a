//! Quaketable library crate for filtering and sorting tabular listings.
//!
//! A [`Table`] holds a header row and data rows of text cells. Two operations
//! reshape it in place: [`filter_rows`] hides rows with no cell containing a
//! free-text query, and [`sort_rows`] (or a caller-owned [`SortSession`])
//! reorders rows by one column, comparing numerically when both values are
//! numbers. The [`render`] module presents the result as text or HTML.

pub mod config;
mod error;
pub mod render;
pub mod table;

pub use config::QuakeTableConfig;
pub use error::TableError;
pub use render::{OutputFormat, render_html, render_text, write_rendered};
pub use table::{
    Cell, FilterSummary, Row, SortDirection, SortOutcome, SortSession, Table, TableSource,
    Visibility, filter_rows, load_table, parse_table, sort_rows,
};
