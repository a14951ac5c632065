use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Tables of arrays use `columns` in the given order; an empty slice means
/// every key, alphabetically.
pub fn render<T: Serialize>(
    value: &T,
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?, columns),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    output_rows(value, &[], format)
}

/// Print a list response, choosing the table columns.
pub fn output_rows<T: Serialize>(
    value: &T,
    columns: &[&str],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, columns, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value, columns: &[&str]) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items, columns)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value], columns: &[&str]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let headers: Vec<String> = if columns.is_empty() {
        let mut keys = items
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|map| map.keys().cloned())
            .collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        keys
    } else {
        columns.iter().map(ToString::to_string).collect()
    };

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
