use crate::error::CoreError;
use crate::structs::RawTradeRecord;
use serde_json::Value;
use std::io::Read;

/// Decodes a snapshot of the trade collection.
///
/// Two layouts are accepted: a JSON array of trade documents, or a JSON
/// object mapping document id to trade document (the document-store export
/// layout). In the keyed layout a document without its own `id` takes its key.
pub fn decode_snapshot(json: &str) -> Result<Vec<RawTradeRecord>, CoreError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Same as [`decode_snapshot`], reading from any `io::Read`.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Vec<RawTradeRecord>, CoreError> {
    let value: Value = serde_json::from_reader(reader)?;
    from_value(value)
}

fn from_value(value: Value) -> Result<Vec<RawTradeRecord>, CoreError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(CoreError::from))
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, item)| {
                let mut record: RawTradeRecord = serde_json::from_value(item)?;
                if record.id.as_ref().is_none_or(Value::is_null) {
                    record.id = Some(Value::String(key));
                }
                Ok(record)
            })
            .collect(),
        other => Err(CoreError::SnapshotLayout(kind_of(&other).to_string())),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
