//! Generate JSON Schema (draft-04) documents from data model definitions.

mod definition;
mod document;
mod encode;
mod error;
mod field;
mod fieldset;
mod model;
mod object;
mod pointer;
mod settings;
mod types;

pub use definition::{Definition, ElementDefinition, FieldDefinition, ModelDefinition};
pub use document::{DRAFT_04_SCHEMA_URI, to_schema, to_schema_string};
pub use encode::{encode_document, sort_keys, write_document};
pub use error::ModelSchemaError;
pub use field::leaf_schema;
pub use fieldset::{Fieldset, fieldset_schema};
pub use model::{Constraints, Field, FieldKind, FieldType, LeafField, ListElement, Metadata, Model};
pub use object::{Shape, model_schema};
pub use pointer::SchemaPointer;
pub use settings::SchemaOptions;
pub use types::json_type;

use std::io::Write;
use std::path::Path;

/// Generate a JSON Schema from a model definition JSON string and write it to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
///
/// # Errors
///
/// Returns `ModelSchemaError` if the definition JSON is invalid, references
/// cannot be resolved, a property order is invalid, or writing fails.
pub fn generate_to_writer<W: Write>(
    definition_json: &str,
    writer: &mut W,
    options: &SchemaOptions,
) -> Result<(), ModelSchemaError> {
    let model = Definition::from_json(definition_json)?.resolve()?;
    let document = to_schema(&model, options)?;
    write_document(document, writer, options)
}

/// Generate a JSON Schema from a model definition file and write it to an output file.
///
/// # Errors
///
/// Returns `ModelSchemaError` if reading the input file fails, the definition
/// is invalid, or writing to the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &SchemaOptions,
) -> Result<(), ModelSchemaError> {
    let definition_json: String = std::fs::read_to_string(input_path)?;
    let mut buffer: Vec<u8> = Vec::new();
    generate_to_writer(&definition_json, &mut buffer, options)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
