//! Table output formatting
//!
//! Nessus responses are untyped JSON; columns pick fields by key.

use chrono::DateTime;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Modify, Style, object::Rows};

const EMPTY: &str = "--";

/// How a cell value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Unix seconds rendered as a date
    Timestamp,
}

/// One table column bound to a JSON field
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub key: &'static str,
    pub kind: CellKind,
}

impl Column {
    pub const fn text(header: &'static str, key: &'static str) -> Self {
        Self {
            header,
            key,
            kind: CellKind::Text,
        }
    }

    pub const fn timestamp(header: &'static str, key: &'static str) -> Self {
        Self {
            header,
            key,
            kind: CellKind::Timestamp,
        }
    }
}

/// Elements of the array under `key`; Nessus sends `null` for empty lists
pub fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn cell(value: Option<&Value>, kind: CellKind) -> String {
    match (value, kind) {
        (None | Some(Value::Null), _) => EMPTY.to_string(),
        (Some(Value::Number(n)), CellKind::Timestamp) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| n.to_string()),
        (Some(Value::String(s)), _) => s.clone(),
        (Some(Value::Array(a)), _) if a.is_empty() => EMPTY.to_string(),
        (Some(other), _) => other.to_string(),
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format one row per item
pub fn format_rows(items: &[Value], columns: &[Column]) -> String {
    if items.is_empty() {
        return "No results found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.header.to_string()));
    for item in items {
        builder.push_record(columns.iter().map(|c| cell(item.get(c.key), c.kind)));
    }

    render(builder)
}

/// Format the top-level fields of an object as FIELD/VALUE rows
pub fn format_object(value: &Value) -> String {
    let Some(object) = value.as_object().filter(|o| !o.is_empty()) else {
        return cell(Some(value), CellKind::Text);
    };

    let mut builder = Builder::default();
    builder.push_record(["FIELD".to_string(), "VALUE".to_string()]);
    for (key, field) in object {
        let rendered = match field {
            Value::Object(_) => "{…}".to_string(),
            Value::Array(a) if !a.is_empty() => format!("[{} items]", a.len()),
            other => cell(Some(other), CellKind::Text),
        };
        builder.push_record([key.clone(), rendered]);
    }

    render(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: [Column; 3] = [
        Column::text("ID", "id"),
        Column::text("NAME", "name"),
        Column::timestamp("MODIFIED", "last_modification_date"),
    ];

    #[test]
    fn test_format_rows_empty() {
        assert_eq!(format_rows(&[], &COLUMNS), "No results found.");
    }

    #[test]
    fn test_format_rows() {
        let items = vec![
            json!({ "id": 5, "name": "weekly", "last_modification_date": 1443532190 }),
            json!({ "id": 6, "name": "adhoc", "last_modification_date": null }),
        ];

        let result = format_rows(&items, &COLUMNS);

        assert!(result.contains("ID"));
        assert!(result.contains("MODIFIED"));
        assert!(result.contains("weekly"));
        assert!(result.contains("2015-09-29"));
        assert!(result.contains("adhoc"));
        assert!(result.contains("--"));
    }

    #[test]
    fn test_format_rows_uses_rounded_style() {
        let result = format_rows(&[json!({ "id": 1, "name": "x" })], &COLUMNS);
        assert!(result.contains('╭'));
    }

    #[test]
    fn test_items_handles_null_list() {
        let value = json!({ "scans": null, "folders": [{ "id": 1 }] });
        assert!(items(&value, "scans").is_empty());
        assert_eq!(items(&value, "folders").len(), 1);
        assert!(items(&value, "missing").is_empty());
    }

    #[test]
    fn test_format_object() {
        let value = json!({
            "status": "ready",
            "progress": null,
            "license": { "type": "home" },
            "capabilities": ["a", "b"]
        });

        let result = format_object(&value);
        assert!(result.contains("FIELD"));
        assert!(result.contains("ready"));
        assert!(result.contains("{…}"));
        assert!(result.contains("[2 items]"));
    }

    #[test]
    fn test_format_object_scalar() {
        assert_eq!(format_object(&json!("done")), "done");
        assert_eq!(format_object(&Value::Null), "--");
    }
}
