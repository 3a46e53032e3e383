use crate::error::ModelSchemaError;
use crate::field::leaf_schema;
use crate::model::{Field, FieldType, ListElement, Model};
use crate::object::{Shape, build_model_schema};
use crate::pointer::SchemaPointer;
use serde_json::{Map, Value, json};

/// The `properties` mapping and `required` list of one model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fieldset {
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
}

/// Build the property schemas of every field of `model`, in declared order.
///
/// Required fields are listed in `required` and stored as-is; every other
/// field is wrapped as `{"oneOf": [{"type": "null"}, <node>]}`.
///
/// # Errors
///
/// Returns `ModelSchemaError` if a nested model has an invalid property order.
pub fn fieldset_schema(model: &Model) -> Result<Fieldset, ModelSchemaError> {
    build_fieldset(model, &SchemaPointer::root())
}

pub(crate) fn build_fieldset(
    model: &Model,
    path: &SchemaPointer,
) -> Result<Fieldset, ModelSchemaError> {
    let mut fieldset: Fieldset = Fieldset::default();

    for field in model.fields() {
        let key: &str = field.key();
        let property_path: SchemaPointer = path.property(key);
        let node_path: SchemaPointer = if field.required {
            property_path
        } else {
            property_path.child("oneOf").child("1")
        };
        tracing::trace!(model = %model.name, field = %field.name, path = %node_path, "building field schema");

        let node: Map<String, Value> = field_schema(field, &node_path)?;

        if field.required {
            fieldset.required.push(key.to_string());
            fieldset
                .properties
                .insert(key.to_string(), Value::Object(node));
        } else {
            fieldset.properties.insert(
                key.to_string(),
                json!({ "oneOf": [{ "type": "null" }, Value::Object(node)] }),
            );
        }
    }

    Ok(fieldset)
}

fn field_schema(
    field: &Field,
    path: &SchemaPointer,
) -> Result<Map<String, Value>, ModelSchemaError> {
    match &field.field_type {
        FieldType::Leaf(leaf) => Ok(leaf_schema(leaf)),
        FieldType::Nested(model) => build_model_schema(model, Shape::Object, path),
        FieldType::ListOf(ListElement::Model(model)) => {
            build_model_schema(model, Shape::Array, path)
        }
        FieldType::ListOf(ListElement::Leaf(leaf)) => {
            let mut node: Map<String, Value> = Map::new();
            node.insert("type".to_string(), Value::String("array".to_string()));
            node.insert("items".to_string(), Value::Object(leaf_schema(leaf)));
            Ok(node)
        }
    }
}
