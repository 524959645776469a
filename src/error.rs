//! Error types surfaced while loading, reshaping, and rendering tables.

use thiserror::Error;

/// Errors surfaced by table loading, sorting, rendering, and configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// No input document was configured.
    #[error("an input table document is required (use --input or -i)")]
    MissingInput,

    /// A sort was requested on a column that some row does not have.
    #[error("column {column} is out of range: a row only has {width} cells")]
    ColumnOutOfRange {
        /// The requested zero-based column index.
        column: usize,
        /// Cell count of the narrowest offending row.
        width: usize,
    },

    /// The table document could not be parsed.
    #[error("failed to parse table document: {message}")]
    Parse {
        /// Details from the JSON parser.
        message: String,
    },

    /// Rendering the table failed.
    #[error("failed to render table: {message}")]
    Render {
        /// Details from the template engine.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
