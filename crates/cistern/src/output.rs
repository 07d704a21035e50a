//! Output rendering for command results.
//!
//! Every command prints either pretty JSON or a markdown-style table. Table
//! columns follow the resource's declared header list; `etag` is hidden from
//! list output unless `--long` is given, matching what the server operators
//! expect to paste into update calls versus skim by eye.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Markdown-style table
    Table,
}

/// Print a list of records.
pub fn print_records<T: Serialize>(
    records: &[T],
    headers: &[&str],
    format: OutputFormat,
    long: bool,
) -> Result<()> {
    let values = to_values(records)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
        OutputFormat::Table => println!("{}", render_table(&values, headers, long)),
    }
    Ok(())
}

/// Print a single record with its full column set.
pub fn print_record<T: Serialize>(record: &T, headers: &[&str], format: OutputFormat) -> Result<()> {
    let value = serde_json::to_value(record)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Table => println!("{}", render_table(std::slice::from_ref(&value), headers, true)),
    }
    Ok(())
}

/// Print a free-form JSON object, optionally projected onto selected keys.
pub fn print_object(value: &Value, columns: Option<&[String]>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let columns: Vec<String> = match columns {
                Some(keys) => keys.to_vec(),
                None => value
                    .as_object()
                    .map(|m| m.keys().cloned().collect())
                    .unwrap_or_default(),
            };
            let mut builder = Builder::default();
            builder.push_record(columns.iter().cloned());
            builder.push_record(columns.iter().map(|c| cell(value, c)));
            let mut table = builder.build();
            table.with(Style::markdown());
            println!("{}", table);
        }
    }
    Ok(())
}

/// Print the synthetic `{id, message}` confirmation used for 204 responses.
pub fn print_message(id: &str, message: &str) -> Result<()> {
    let body = serde_json::json!({ "id": id, "message": message });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn to_values<T: Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(Into::into))
        .collect()
}

fn render_table(values: &[Value], headers: &[&str], long: bool) -> String {
    let columns: Vec<&str> = if long {
        headers.to_vec()
    } else {
        headers.iter().filter(|h| **h != "etag").copied().collect()
    };

    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());
    for value in values {
        builder.push_record(columns.iter().map(|c| cell(value, c)));
    }

    let mut table = builder.build();
    table.with(Style::markdown());
    table.to_string()
}

fn cell(record: &Value, column: &str) -> String {
    match record.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HEADERS: &[&str] = &["id", "name", "state", "etag"];

    fn sample() -> Vec<Value> {
        vec![
            json!({ "id": "u1", "name": "foo", "state": "active", "etag": "e1" }),
            json!({ "id": "u2", "name": "bar", "state": "inactive", "etag": "e2" }),
        ]
    }

    #[test]
    fn test_one_header_row_one_row_per_record() {
        let table = render_table(&sample(), HEADERS, true);
        let lines: Vec<&str> = table.lines().collect();

        // header + separator + one line per record
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('|'));
        assert!(lines[0].contains(" id "));
        assert!(lines[0].contains(" name "));
        assert!(lines[2].contains(" foo "));
        assert!(lines[3].contains(" bar "));
    }

    #[test]
    fn test_column_order_follows_headers() {
        let table = render_table(&sample(), HEADERS, true);
        let header = table.lines().next().unwrap();
        let id_pos = header.find(" id ").unwrap();
        let name_pos = header.find(" name ").unwrap();
        let etag_pos = header.find(" etag ").unwrap();
        assert!(id_pos < name_pos && name_pos < etag_pos);
    }

    #[test]
    fn test_etag_hidden_unless_long() {
        let short = render_table(&sample(), HEADERS, false);
        assert!(!short.contains("etag"));
        assert!(!short.contains("e1"));

        let long = render_table(&sample(), HEADERS, true);
        assert!(long.contains("etag"));
        assert!(long.contains("e1"));
    }

    #[test]
    fn test_missing_and_non_string_cells() {
        let values = vec![json!({ "id": "j1", "name": null, "state": true })];
        let table = render_table(&values, &["id", "name", "state", "comment"], true);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains(" j1 "));
        assert!(row.contains(" true "));
    }
}
