use crate::encode::encode_document;
use crate::error::ModelSchemaError;
use crate::model::Model;
use crate::object::{Shape, model_schema};
use crate::settings::SchemaOptions;
use serde_json::{Map, Value};

/// Dialect URI of JSON Schema draft-04.
pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Build the JSON Schema document for `model`.
///
/// The document starts with `$schema` and `id`, followed by the keys of the
/// model's object schema. Only `options.schema_id` affects the structure.
///
/// # Errors
///
/// Returns `ModelSchemaError` if any model in the graph has an invalid
/// property order. No partial document is returned.
pub fn to_schema(model: &Model, options: &SchemaOptions) -> Result<Value, ModelSchemaError> {
    tracing::debug!(model = %model.name, schema_id = ?options.schema_id, "generating schema document");

    let body: Map<String, Value> = model_schema(model, Shape::Object)?;

    let mut document: Map<String, Value> = Map::new();
    document.insert(
        "$schema".to_string(),
        Value::String(DRAFT_04_SCHEMA_URI.to_string()),
    );
    document.insert(
        "id".to_string(),
        Value::String(options.schema_id.clone().unwrap_or_default()),
    );
    document.extend(body);
    Ok(Value::Object(document))
}

/// Build the JSON Schema document for `model` and encode it as text.
///
/// # Errors
///
/// Returns `ModelSchemaError` if generation or encoding fails.
pub fn to_schema_string(model: &Model, options: &SchemaOptions) -> Result<String, ModelSchemaError> {
    let document: Value = to_schema(model, options)?;
    encode_document(document, options)
}
