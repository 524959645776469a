//! HTML fragment rendering.
//!
//! The fragment is a bare `<table>` whose element id is supplied by the
//! caller. Hidden rows stay in the markup with `style="display:none"` so a
//! page can re-show them without re-rendering. Header cells carry their
//! zero-based column index in `data-column`.

use minijinja::{AutoEscape, Environment, context};
use serde::Serialize;

use crate::error::TableError;
use crate::table::{Cell, Row, Table};

const TABLE_TEMPLATE_NAME: &str = "table.html";

const TABLE_TEMPLATE: &str = r#"<table id="{{ table_id }}">
  <thead>
    <tr>{% for heading in header %}<th data-column="{{ loop.index0 }}">{{ heading }}</th>{% endfor %}</tr>
  </thead>
  <tbody>
{%- for row in rows %}
    <tr{% if row.hidden %} style="display:none"{% endif %}>{% for cell in row.cells %}<td>{{ cell }}</td>{% endfor %}</tr>
{%- endfor %}
  </tbody>
</table>
"#;

#[derive(Debug, Serialize)]
struct TemplateRow<'a> {
    hidden: bool,
    cells: Vec<&'a str>,
}

impl<'a> From<&'a Row> for TemplateRow<'a> {
    fn from(row: &'a Row) -> Self {
        Self {
            hidden: !row.is_visible(),
            cells: row.cells().iter().map(Cell::text).collect(),
        }
    }
}

/// Renders `table` as an HTML `<table>` with the given element id.
///
/// Cell text and the id are HTML-escaped.
///
/// # Errors
///
/// Returns [`TableError::Render`] if the template fails to compile or render.
pub fn render_html(table: &Table, table_id: &str) -> Result<String, TableError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(TABLE_TEMPLATE_NAME, TABLE_TEMPLATE)
        .map_err(|error| TableError::Render {
            message: format!("invalid table template: {error}"),
        })?;

    let header: Vec<&str> = table.header().cells().iter().map(Cell::text).collect();
    let rows: Vec<TemplateRow<'_>> = table.rows().iter().map(TemplateRow::from).collect();

    let template = env
        .get_template(TABLE_TEMPLATE_NAME)
        .map_err(|error| TableError::Render {
            message: format!("failed to retrieve table template: {error}"),
        })?;

    template
        .render(context! {
            table_id => table_id,
            header => header,
            rows => rows,
        })
        .map_err(|error| TableError::Render {
            message: format!("table rendering failed: {error}"),
        })
}
