use crate::model::{Constraints, LeafField};
use crate::types::json_type;
use serde_json::{Map, Value};

/// Constraint values paired with the JSON Schema keyword they are emitted under.
/// Order here is the key order of the emitted node.
fn constraint_keywords(constraints: &Constraints) -> [(&'static str, Option<Value>); 6] {
    [
        ("maxLength", constraints.max_length.map(Value::from)),
        ("minLength", constraints.min_length.map(Value::from)),
        ("pattern", constraints.regex.clone().map(Value::String)),
        ("minimum", constraints.min_value.clone().map(Value::Number)),
        ("maximum", constraints.max_value.clone().map(Value::Number)),
        ("enum", constraints.choices.clone().map(Value::Array)),
    ]
}

/// Build the schema node for a leaf field.
///
/// `title` and `description` are only emitted when the field carries metadata;
/// missing label/description inside present metadata become empty strings.
#[must_use]
pub fn leaf_schema(leaf: &LeafField) -> Map<String, Value> {
    let mut node: Map<String, Value> = Map::new();

    if let Some(metadata) = &leaf.metadata {
        node.insert(
            "title".to_string(),
            Value::String(metadata.label.clone().unwrap_or_default()),
        );
        node.insert(
            "description".to_string(),
            Value::String(metadata.description.clone().unwrap_or_default()),
        );
    }

    node.insert(
        "type".to_string(),
        Value::String(json_type(&leaf.kind).to_string()),
    );

    for (keyword, value) in constraint_keywords(&leaf.constraints) {
        if let Some(value) = value {
            node.insert(keyword.to_string(), value);
        }
    }

    if let Some(default) = &leaf.default
        && !default.is_null()
    {
        node.insert("default".to_string(), default.clone());
    }

    node
}
