use base64::{engine::general_purpose::STANDARD, Engine as _};
use gql_core::stmt::Value;

/// Format a value the way it appears in display text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Decimal(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::DateTime(v) => v.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        Value::Bytes(v) => STANDARD.encode(v),
        Value::Enum(v) => v.name.to_string(),
        Value::Key(key) => key.to_string(),
        Value::List(items) => {
            let items: Vec<_> = items.iter().map(display_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Map(entries) => {
            let entries: Vec<_> = entries
                .iter()
                .map(|(k, v)| format!("{k}: {}", display_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Record(record) => {
            let fields: Vec<_> = record.iter().map(display_value).collect();
            format!("({})", fields.join(", "))
        }
    }
}
