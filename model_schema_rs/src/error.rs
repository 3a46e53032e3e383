use crate::pointer::SchemaPointer;
use std::error;
use std::fmt;

/// Error type for schema generation and model definition loading.
#[derive(Debug)]
pub enum ModelSchemaError {
    /// Generic error with a message.
    GenericError(String),

    /// A model's property order names a key that is not among its properties.
    UnknownOrderedProperty {
        path: SchemaPointer,
        property: String,
    },

    /// A model definition references a model name that is not defined.
    UnknownModel(String),

    /// Model definitions reference each other in a cycle; the name is where
    /// the cycle was closed.
    CyclicModel(String),

    /// A `model` field definition without a `model` reference.
    MissingModelReference(String),

    /// A `list` field definition without `items`.
    MissingListItems(String),

    /// I/O error (e.g., reading a definition file, writing the schema).
    IoError(std::io::Error),

    /// JSON parsing or encoding error.
    JsonError(serde_json::Error),
}

impl error::Error for ModelSchemaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoError(io_error) => Some(io_error),
            Self::JsonError(json_error) => Some(json_error),
            _ => None,
        }
    }
}

impl fmt::Display for ModelSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericError(message) => write!(f, "{message}"),
            Self::UnknownOrderedProperty { path, property } => write!(
                f,
                "property order at {path} names unknown property \"{property}\""
            ),
            Self::UnknownModel(name) => write!(f, "unknown model \"{name}\""),
            Self::CyclicModel(name) => {
                write!(f, "model \"{name}\" is part of a reference cycle")
            }
            Self::MissingModelReference(field) => {
                write!(f, "field \"{field}\" has type \"model\" but no model reference")
            }
            Self::MissingListItems(field) => {
                write!(f, "field \"{field}\" has type \"list\" but no items")
            }
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
        }
    }
}

impl From<&str> for ModelSchemaError {
    fn from(message: &str) -> Self {
        Self::GenericError(message.to_string())
    }
}

impl From<String> for ModelSchemaError {
    fn from(message: String) -> Self {
        Self::GenericError(message)
    }
}

impl From<std::io::Error> for ModelSchemaError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for ModelSchemaError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
