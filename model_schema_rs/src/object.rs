use crate::error::ModelSchemaError;
use crate::fieldset::{Fieldset, build_fieldset};
use crate::model::Model;
use crate::pointer::SchemaPointer;
use serde_json::{Map, Value};

/// Whether a model is emitted as a single object or as an array of objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Object,
    Array,
}

/// Build the schema node for `model`.
///
/// Keys are emitted in the order `title`, `description`, `type`, `required`
/// (only when non-empty), `properties`. Missing model metadata yields empty
/// `title` and `description`. With [`Shape::Array`] the object node is wrapped
/// as `{"type": "array", "items": <object>}`.
///
/// The model graph must be acyclic.
///
/// # Errors
///
/// Returns `ModelSchemaError::UnknownOrderedProperty` if this model or any
/// nested model has a property order naming a key it does not have.
pub fn model_schema(model: &Model, shape: Shape) -> Result<Map<String, Value>, ModelSchemaError> {
    build_model_schema(model, shape, &SchemaPointer::root())
}

pub(crate) fn build_model_schema(
    model: &Model,
    shape: Shape,
    path: &SchemaPointer,
) -> Result<Map<String, Value>, ModelSchemaError> {
    let object_path: SchemaPointer = match shape {
        Shape::Object => path.clone(),
        Shape::Array => path.items(),
    };
    tracing::trace!(model = %model.name, path = %object_path, "building model schema");

    let Fieldset {
        properties,
        required,
    } = build_fieldset(model, &object_path)?;

    let properties: Map<String, Value> = match &model.order {
        Some(order) => reorder_properties(properties, order, &object_path)?,
        None => properties,
    };

    let (title, description): (String, String) = model
        .metadata
        .as_ref()
        .map(|m| {
            (
                m.label.clone().unwrap_or_default(),
                m.description.clone().unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    let mut node: Map<String, Value> = Map::new();
    node.insert("title".to_string(), Value::String(title));
    node.insert("description".to_string(), Value::String(description));
    node.insert("type".to_string(), Value::String("object".to_string()));
    if !required.is_empty() {
        node.insert(
            "required".to_string(),
            Value::Array(required.into_iter().map(Value::String).collect()),
        );
    }
    node.insert("properties".to_string(), Value::Object(properties));

    Ok(match shape {
        Shape::Object => node,
        Shape::Array => {
            let mut array: Map<String, Value> = Map::new();
            array.insert("type".to_string(), Value::String("array".to_string()));
            array.insert("items".to_string(), Value::Object(node));
            array
        }
    })
}

/// Re-emit `properties` with the keys named in `order` first, in that sequence,
/// followed by any remaining keys in their computed order.
fn reorder_properties(
    mut properties: Map<String, Value>,
    order: &[String],
    path: &SchemaPointer,
) -> Result<Map<String, Value>, ModelSchemaError> {
    if let Some(unknown) = order.iter().find(|key| !properties.contains_key(key.as_str())) {
        return Err(ModelSchemaError::UnknownOrderedProperty {
            path: path.clone(),
            property: unknown.clone(),
        });
    }

    let mut ordered: Map<String, Value> = Map::new();
    for key in order {
        if let Some((key, value)) = properties.shift_remove_entry(key.as_str()) {
            ordered.insert(key, value);
        }
    }
    ordered.extend(properties);
    Ok(ordered)
}
