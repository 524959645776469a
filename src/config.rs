//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.quaketable.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `QUAKETABLE_INPUT`, `QUAKETABLE_QUERY`, …
//! 4. **Command-line arguments** – `--input`/`-i`, `--query`/`-q`, …
//!
//! # Configuration File
//!
//! ```toml
//! input = "quakes.json"
//! query = "japan"
//! sort_column = 2
//! sort_clicks = 1
//! format = "html"
//! table_id = "earthquakeTable"
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::render::{DEFAULT_TABLE_ID, OutputFormat};

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `QUAKETABLE_INPUT` or `--input`: Path to the table document
/// - `QUAKETABLE_QUERY` or `--query`: Free-text row filter
/// - `QUAKETABLE_SORT_COLUMN` or `--sort-column`: Zero-based column to sort
/// - `QUAKETABLE_SORT_CLICKS` or `--sort-clicks`: Consecutive sorts to apply
/// - `QUAKETABLE_FORMAT` or `--format`: `text` or `html`
/// - `QUAKETABLE_TABLE_ID` or `--table-id`: Element id for HTML output
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use quaketable::QuakeTableConfig;
///
/// let config = QuakeTableConfig::load().expect("failed to load configuration");
/// let input = config.require_input().expect("input required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "QUAKETABLE",
    discovery(
        dotfile_name = ".quaketable.toml",
        config_file_name = "quaketable.toml",
        app_name = "quaketable"
    )
)]
pub struct QuakeTableConfig {
    /// Path to the JSON table document.
    ///
    /// Can be provided via:
    /// - CLI: `--input <PATH>` or `-i <PATH>`
    /// - Environment: `QUAKETABLE_INPUT`
    /// - Config file: `input = "..."`
    #[ortho_config(cli_short = 'i')]
    pub input: Option<String>,

    /// Free-text query; rows with no cell containing it are hidden.
    ///
    /// Can be provided via:
    /// - CLI: `--query <TEXT>` or `-q <TEXT>`
    /// - Environment: `QUAKETABLE_QUERY`
    /// - Config file: `query = "..."`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Zero-based column to sort by.
    ///
    /// Can be provided via:
    /// - CLI: `--sort-column <INDEX>` or `-s <INDEX>`
    /// - Environment: `QUAKETABLE_SORT_COLUMN`
    /// - Config file: `sort_column = 2`
    #[ortho_config(cli_short = 's')]
    pub sort_column: Option<usize>,

    /// Number of consecutive sorts applied to `sort_column`.
    ///
    /// Each sort behaves like a click on the column heading: the first
    /// sorts ascending, a second on an ascending column sorts descending.
    ///
    /// Defaults to 1.
    #[ortho_config(cli_short = 'c')]
    pub sort_clicks: u32,

    /// Output format, `text` or `html`.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `QUAKETABLE_FORMAT`
    /// - Config file: `format = "html"`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Element id given to the HTML table.
    ///
    /// Defaults to `earthquakeTable`.
    #[ortho_config()]
    pub table_id: Option<String>,
}

const DEFAULT_SORT_CLICKS: u32 = 1;

impl Default for QuakeTableConfig {
    fn default() -> Self {
        Self {
            input: None,
            query: None,
            sort_column: None,
            sort_clicks: DEFAULT_SORT_CLICKS,
            format: None,
            table_id: None,
        }
    }
}

impl QuakeTableConfig {
    /// Returns the input document path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingInput`] when no input is configured.
    pub fn require_input(&self) -> Result<&Utf8Path, TableError> {
        self.input
            .as_deref()
            .map(Utf8Path::new)
            .ok_or(TableError::MissingInput)
    }

    /// Returns the configured output format, defaulting to text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Configuration`] for an unknown format name.
    pub fn output_format(&self) -> Result<OutputFormat, TableError> {
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::default()), str::parse)
    }

    /// Returns the element id for HTML output.
    #[must_use]
    pub fn table_id(&self) -> &str {
        self.table_id.as_deref().unwrap_or(DEFAULT_TABLE_ID)
    }
}

#[cfg(test)]
mod tests {
    use ortho_config::MergeComposer;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    /// Applies a configuration layer to the composer based on the layer type.
    fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
        match layer_type {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            _ => panic!("unknown layer type: {layer_type}"),
        }
    }

    #[rstest]
    #[case::file_overrides_defaults(
        vec![("defaults", json!({"query": "default"})), ("file", json!({"query": "file"}))],
        "file",
        "file should override default"
    )]
    #[case::environment_overrides_file(
        vec![("file", json!({"query": "file"})), ("environment", json!({"query": "env"}))],
        "env",
        "environment should override file"
    )]
    #[case::cli_overrides_environment(
        vec![("environment", json!({"query": "env"})), ("cli", json!({"query": "cli"}))],
        "cli",
        "CLI should override environment"
    )]
    fn test_layer_precedence(
        #[case] layers: Vec<(&str, Value)>,
        #[case] expected: &str,
        #[case] message: &str,
    ) {
        let mut composer = MergeComposer::new();
        for (layer_type, value) in layers {
            apply_layer(&mut composer, layer_type, value);
        }

        let config =
            QuakeTableConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.query.as_deref(), Some(expected), "{message}");
    }

    #[rstest]
    fn numeric_fields_merge_from_layers() {
        let mut composer = MergeComposer::new();
        composer.push_defaults(json!({"sort_clicks": 1}));
        composer.push_file(json!({"sort_column": 2}), None);
        composer.push_cli(json!({"sort_clicks": 2}));

        let config =
            QuakeTableConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.sort_column, Some(2));
        assert_eq!(config.sort_clicks, 2);
    }

    #[rstest]
    fn missing_input_is_an_error() {
        let config = QuakeTableConfig::default();
        assert_eq!(config.require_input(), Err(TableError::MissingInput));
    }

    #[rstest]
    fn input_is_returned_as_path() {
        let config = QuakeTableConfig {
            input: Some("data/quakes.json".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            config.require_input().map(Utf8Path::as_str),
            Ok("data/quakes.json")
        );
    }

    #[rstest]
    #[case::unset(None, Ok(OutputFormat::Text))]
    #[case::html(Some("html"), Ok(OutputFormat::Html))]
    fn output_format_defaults_to_text(
        #[case] format: Option<&str>,
        #[case] expected: Result<OutputFormat, TableError>,
    ) {
        let config = QuakeTableConfig {
            format: format.map(ToOwned::to_owned),
            ..Default::default()
        };
        assert_eq!(config.output_format(), expected);
    }

    #[rstest]
    fn unknown_format_is_a_configuration_error() {
        let config = QuakeTableConfig {
            format: Some("xml".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            config.output_format(),
            Err(TableError::Configuration { .. })
        ));
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let config = QuakeTableConfig::default();
        assert_eq!(config.sort_clicks, 1);
        assert_eq!(config.table_id(), "earthquakeTable");
        assert!(config.sort_column.is_none());
    }
}
