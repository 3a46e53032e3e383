//! Data model definitions consumed by the schema generator.
//!
//! A [`Model`] is an ordered set of named [`Field`]s plus optional metadata and
//! an optional explicit property order. Nested models are shared via [`Arc`],
//! so a single definition can be referenced from many fields.

use serde::Deserialize;
use std::sync::Arc;

/// Human-readable metadata attached to a model or a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl Metadata {
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            description: Some(description.into()),
        }
    }
}

/// Semantic kind of a leaf field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Integer,
    Long,
    Float,
    Decimal,
    Boolean,
    String,
    /// A field that declares no specific leaf kind.
    Untyped,
    /// Any kind the generator has no dedicated mapping for (url, email, date, ...).
    Other(String),
}

impl FieldKind {
    /// Parse a kind name as written in a model definition file.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "number" => Self::Number,
            "int" | "integer" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "bool" | "boolean" => Self::Boolean,
            "string" => Self::String,
            "untyped" | "base" => Self::Untyped,
            _ => Self::Other(name.to_string()),
        }
    }
}

/// Validation constraints declared on a leaf field.
///
/// Attribute names follow the modeling framework (`regex`, `min_value`, ...);
/// the generator renames them to their JSON Schema keywords.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub max_length: Option<u64>,

    #[serde(default)]
    pub min_length: Option<u64>,

    #[serde(default)]
    pub regex: Option<String>,

    #[serde(default)]
    pub min_value: Option<serde_json::Number>,

    #[serde(default)]
    pub max_value: Option<serde_json::Number>,

    #[serde(default)]
    pub choices: Option<Vec<serde_json::Value>>,
}

/// A field holding a primitive value.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafField {
    pub kind: FieldKind,
    pub constraints: Constraints,
    /// `None` means the field has no metadata at all, which omits `title` and
    /// `description` from its schema node.
    pub metadata: Option<Metadata>,
    pub default: Option<serde_json::Value>,
}

impl LeafField {
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            constraints: Constraints::default(),
            metadata: None,
            default: None,
        }
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Element type of a list field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListElement {
    Leaf(LeafField),
    Model(Arc<Model>),
}

/// Shape of a field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Leaf(LeafField),
    Nested(Arc<Model>),
    ListOf(ListElement),
}

/// A named field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub serialized_name: Option<String>,
    pub required: bool,
    pub field_type: FieldType,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            serialized_name: None,
            required: false,
            field_type,
        }
    }

    #[must_use]
    pub fn leaf(name: impl Into<String>, leaf: LeafField) -> Self {
        Self::new(name, FieldType::Leaf(leaf))
    }

    #[must_use]
    pub fn nested(name: impl Into<String>, model: Arc<Model>) -> Self {
        Self::new(name, FieldType::Nested(model))
    }

    #[must_use]
    pub fn list_of(name: impl Into<String>, element: ListElement) -> Self {
        Self::new(name, FieldType::ListOf(element))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn serialized_as(mut self, serialized_name: impl Into<String>) -> Self {
        self.serialized_name = Some(serialized_name.into());
        self
    }

    /// The key under which this field appears in `properties` and `required`.
    #[must_use]
    pub fn key(&self) -> &str {
        self.serialized_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}

/// A data model: ordered fields, optional metadata and an optional property order.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub metadata: Option<Metadata>,
    pub order: Option<Vec<String>>,
    fields: Vec<Field>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
            order: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Add a field. A field with the same name replaces the earlier one in place.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.insert_field(field);
        self
    }

    pub fn insert_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
