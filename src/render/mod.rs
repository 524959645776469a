//! Presentation of a [`Table`] as aligned text or as an HTML fragment.
//!
//! Renderers only read the table. Filtering and sorting happen beforehand on
//! the table itself, so a renderer sees the current row order and skips or
//! marks hidden rows.

pub mod html;
pub mod text;

use std::io::Write;
use std::str::FromStr;

use crate::error::TableError;
use crate::table::Table;

pub use html::render_html;
pub use text::render_text;

/// Element id used for the HTML table when none is configured.
pub const DEFAULT_TABLE_ID: &str = "earthquakeTable";

/// Output format produced by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Column-aligned plain text listing only visible rows.
    #[default]
    Text,
    /// An HTML `<table>` fragment with hidden rows marked as not displayed.
    Html,
}

impl FromStr for OutputFormat {
    type Err = TableError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => Err(TableError::Configuration {
                message: format!("unsupported output format '{other}' (expected text or html)"),
            }),
        }
    }
}

/// Renders `table` in the requested format.
///
/// `table_id` is only used by the HTML renderer.
///
/// # Errors
///
/// Returns [`TableError::Render`] when the HTML template fails to render.
pub fn render(table: &Table, format: OutputFormat, table_id: &str) -> Result<String, TableError> {
    match format {
        OutputFormat::Text => Ok(render_text(table)),
        OutputFormat::Html => render_html(table, table_id),
    }
}

/// Renders `table` and writes it to `writer`.
///
/// # Errors
///
/// Returns [`TableError::Render`] when rendering fails and [`TableError::Io`]
/// when writing fails.
pub fn write_rendered<W: Write>(
    writer: &mut W,
    table: &Table,
    format: OutputFormat,
    table_id: &str,
) -> Result<(), TableError> {
    let output = render(table, format, table_id)?;
    writer
        .write_all(output.as_bytes())
        .map_err(|error| TableError::Io {
            message: format!("failed to write rendered table: {error}"),
        })
}
