//! Text encoding of generated schema documents.

use crate::error::ModelSchemaError;
use crate::settings::SchemaOptions;
use serde_json::{Map, Value};
use std::io::Write;

/// Returns `value` with the keys of every nested object sorted lexicographically.
#[must_use]
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Encode `document` as JSON text into `writer` according to `options`.
///
/// # Errors
///
/// Returns `ModelSchemaError` if serialization or writing fails.
pub fn write_document<W: Write>(
    document: Value,
    writer: &mut W,
    options: &SchemaOptions,
) -> Result<(), ModelSchemaError> {
    let document: Value = if options.sort_keys {
        sort_keys(document)
    } else {
        document
    };
    if options.pretty {
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writeln!(writer)?;
    } else {
        serde_json::to_writer(&mut *writer, &document)?;
    }
    Ok(())
}

/// Encode `document` as a JSON string according to `options`.
///
/// # Errors
///
/// Returns `ModelSchemaError` if serialization fails.
pub fn encode_document(document: Value, options: &SchemaOptions) -> Result<String, ModelSchemaError> {
    let mut buffer: Vec<u8> = Vec::new();
    write_document(document, &mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| ModelSchemaError::GenericError(e.to_string()))
}
