//! Output formatting for CLI display.
//!
//! Records are rendered from their JSON form, so any resource can be shown
//! without a per-type formatter. Column names may be dotted paths into
//! nested objects, e.g. `status.name`.

use serde_json::Value;
use tabled::builder::Builder;

/// Look up a dotted path (`company.identifier`) in a record.
fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |value, key| value.get(key))
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The values of `columns` for one record, as display strings.
pub fn select_columns(record: &Value, columns: &[String]) -> Vec<String> {
    columns.iter().map(|c| cell(lookup(record, c))).collect()
}

/// Render records as a table with one column per entry in `columns`.
pub fn render_table(records: &[Value], columns: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().cloned());
    for record in records {
        builder.push_record(select_columns(record, columns));
    }
    builder.build().to_string()
}

/// Render one record as aligned `key: value` lines, skipping nulls.
pub fn pretty_print(record: &Value) -> String {
    let Some(fields) = record.as_object() else {
        return cell(Some(record));
    };

    let width = fields.keys().map(String::len).max().unwrap_or(0);
    fields
        .iter()
        .filter(|(key, value)| !value.is_null() && key.as_str() != "_info")
        .map(|(key, value)| {
            let shown = match value {
                // Reference objects read best as their name.
                Value::Object(obj) => obj
                    .get("name")
                    .or_else(|| obj.get("identifier"))
                    .map_or_else(|| value.to_string(), |v| cell(Some(v))),
                other => cell(Some(other)),
            };
            format!("{key:<width$}  {shown}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_nested_columns() {
        let record = json!({"id": 7, "status": {"name": "New"}, "summary": null});
        let columns = vec!["id".to_string(), "status.name".to_string(), "summary".to_string()];

        assert_eq!(select_columns(&record, &columns), vec!["7", "New", ""]);
    }

    #[test]
    fn test_render_table_has_header_and_rows() {
        let records = vec![
            json!({"id": 1, "summary": "First"}),
            json!({"id": 2, "summary": "Second"}),
        ];
        let output = render_table(&records, &["id".to_string(), "summary".to_string()]);

        assert!(output.contains("summary"));
        assert!(output.contains("First"));
        assert!(output.contains("Second"));
        assert!(output.contains('|'));
    }

    #[test]
    fn test_pretty_print_is_not_json() {
        let record = json!({
            "id": 1042,
            "summary": "Printer offline",
            "board": {"id": 1, "name": "Help Desk"},
            "owner": null,
            "_info": {"updatedBy": "jdoe"}
        });
        let output = pretty_print(&record);

        assert!(serde_json::from_str::<Value>(&output).is_err());
        assert!(output.contains("Help Desk"));
        assert!(!output.contains("owner"));
        assert!(!output.contains("updatedBy"));
    }
}
