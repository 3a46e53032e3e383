//! Model definition files.
//!
//! A definition file is JSON naming a root model and a set of models whose
//! fields may reference each other by name:
//!
//! ```json
//! {
//!   "root": "Person",
//!   "models": {
//!     "Person": {
//!       "label": "Person",
//!       "fields": [
//!         { "name": "name", "type": "string", "required": true },
//!         { "name": "accounts", "type": "list", "items": { "model": "Account" } }
//!       ]
//!     },
//!     "Account": { "fields": [{ "name": "id", "type": "long", "min_value": 0 }] }
//!   }
//! }
//! ```
//!
//! Loading resolves the references into a shared [`Model`] graph and rejects
//! unknown names and reference cycles.

use crate::error::ModelSchemaError;
use crate::model::{Constraints, Field, FieldKind, FieldType, LeafField, ListElement, Metadata, Model};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Root of a model definition file.
#[derive(Debug, Deserialize)]
pub struct Definition {
    pub root: String,

    pub models: BTreeMap<String, ModelDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct ModelDefinition {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub order: Option<Vec<String>>,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct FieldDefinition {
    pub name: String,

    /// A leaf kind name, `model` or `list`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub serialized_name: Option<String>,

    /// Referenced model name for `model` fields.
    #[serde(default)]
    pub model: Option<String>,

    /// Element definition for `list` fields.
    #[serde(default)]
    pub items: Option<ElementDefinition>,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    #[serde(default)]
    pub default: Option<serde_json::Value>,

    #[serde(flatten)]
    pub constraints: Constraints,
}

/// Element of a `list` field: a model reference or a leaf.
#[derive(Debug, Deserialize)]
pub struct ElementDefinition {
    #[serde(default)]
    pub model: Option<String>,

    /// Leaf kind name; absent means untyped.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    #[serde(default)]
    pub default: Option<serde_json::Value>,

    #[serde(flatten)]
    pub constraints: Constraints,
}

impl Definition {
    /// Parse a definition from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ModelSchemaError::JsonError` if the text is not a valid definition.
    pub fn from_json(definition_json: &str) -> Result<Self, ModelSchemaError> {
        Ok(serde_json::from_str(definition_json)?)
    }

    /// Resolve the root model and every model it references.
    ///
    /// # Errors
    ///
    /// Returns `ModelSchemaError` if a referenced model is undefined, the
    /// references form a cycle, or a `model`/`list` field is incomplete.
    pub fn resolve(&self) -> Result<Arc<Model>, ModelSchemaError> {
        let mut resolver: Resolver<'_> = Resolver {
            models: &self.models,
            resolved: BTreeMap::new(),
            visiting: BTreeSet::new(),
        };
        resolver.resolve(&self.root)
    }
}

struct Resolver<'a> {
    models: &'a BTreeMap<String, ModelDefinition>,
    resolved: BTreeMap<&'a str, Arc<Model>>,
    visiting: BTreeSet<&'a str>,
}

impl<'a> Resolver<'a> {
    fn resolve(&mut self, name: &str) -> Result<Arc<Model>, ModelSchemaError> {
        let models: &'a BTreeMap<String, ModelDefinition> = self.models;
        let Some((name, definition)) = models.get_key_value(name) else {
            return Err(ModelSchemaError::UnknownModel(name.to_string()));
        };
        let name: &'a str = name.as_str();
        if let Some(model) = self.resolved.get(name) {
            return Ok(Arc::clone(model));
        }
        if !self.visiting.insert(name) {
            return Err(ModelSchemaError::CyclicModel(name.to_string()));
        }
        tracing::trace!(model = name, "resolving model definition");

        let mut model: Model = Model::new(name);
        if definition.label.is_some() || definition.description.is_some() {
            model = model.with_metadata(Metadata {
                label: definition.label.clone(),
                description: definition.description.clone(),
            });
        }
        if let Some(order) = &definition.order {
            model = model.with_order(order.iter().cloned());
        }
        for field in &definition.fields {
            let resolved: Field = self.resolve_field(field)?;
            model.insert_field(resolved);
        }

        self.visiting.remove(name);
        let model: Arc<Model> = Arc::new(model);
        self.resolved.insert(name, Arc::clone(&model));
        Ok(model)
    }

    fn resolve_field(&mut self, field: &FieldDefinition) -> Result<Field, ModelSchemaError> {
        let field_type: FieldType = match field.kind.as_str() {
            "model" => {
                let Some(model_name) = &field.model else {
                    return Err(ModelSchemaError::MissingModelReference(field.name.clone()));
                };
                FieldType::Nested(self.resolve(model_name)?)
            }
            "list" => {
                let Some(items) = &field.items else {
                    return Err(ModelSchemaError::MissingListItems(field.name.clone()));
                };
                FieldType::ListOf(self.resolve_element(items)?)
            }
            kind => FieldType::Leaf(LeafField {
                kind: FieldKind::from_name(kind),
                constraints: field.constraints.clone(),
                metadata: field.metadata.clone(),
                default: field.default.clone(),
            }),
        };

        let mut resolved: Field = Field::new(field.name.clone(), field_type);
        resolved.required = field.required;
        resolved.serialized_name.clone_from(&field.serialized_name);
        Ok(resolved)
    }

    fn resolve_element(
        &mut self,
        element: &ElementDefinition,
    ) -> Result<ListElement, ModelSchemaError> {
        if let Some(model_name) = &element.model {
            return Ok(ListElement::Model(self.resolve(model_name)?));
        }
        let kind: FieldKind = element
            .kind
            .as_deref()
            .map_or(FieldKind::Untyped, FieldKind::from_name);
        Ok(ListElement::Leaf(LeafField {
            kind,
            constraints: element.constraints.clone(),
            metadata: element.metadata.clone(),
            default: element.default.clone(),
        }))
    }
}
