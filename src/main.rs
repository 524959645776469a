//! Quaketable CLI entrypoint: load a table, filter and sort it, render it.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use quaketable::{
    QuakeTableConfig, SortSession, Table, TableError, filter_rows, load_table, write_rendered,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TableError> {
    let config = load_config()?;

    let input = config.require_input()?;
    let format = config.output_format()?;
    let mut table = load_table(input)?;

    apply_view(&config, &mut table)?;

    let mut stdout = io::stdout().lock();
    write_rendered(&mut stdout, &table, format, config.table_id())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TableError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<QuakeTableConfig, TableError> {
    QuakeTableConfig::load().map_err(|error| TableError::Configuration {
        message: error.to_string(),
    })
}

/// Applies the configured filter and sort clicks to `table`.
fn apply_view(config: &QuakeTableConfig, table: &mut Table) -> Result<(), TableError> {
    if let Some(query) = config.query.as_deref() {
        filter_rows(table, query);
    }

    let Some(column) = config.sort_column else {
        return Ok(());
    };

    let mut session = SortSession::new();
    for _ in 0..config.sort_clicks {
        let outcome = session.sort(table, column)?;
        tracing::trace!(
            swaps = outcome.swaps,
            direction = outcome.direction.as_str(),
            "applied sort click"
        );
    }
    Ok(())
}
