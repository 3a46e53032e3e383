use model_schema_rs::{
    Constraints, Definition, Field, FieldKind, LeafField, ListElement, Metadata, Model,
    ModelSchemaError, SchemaOptions, Shape, generate_from_file, generate_to_writer, model_schema,
    to_schema, to_schema_string,
};
use serde_json::{Value, json};
use std::sync::Arc;

const PERSON_DEFINITION: &str = include_str!("fixtures/person.json");

fn person_document(options: &SchemaOptions) -> Value {
    let model: Arc<Model> = Definition::from_json(PERSON_DEFINITION)
        .unwrap()
        .resolve()
        .unwrap();
    to_schema(&model, options).unwrap()
}

#[test]
fn person_definition_produces_expected_document() {
    let actual: Value = person_document(&SchemaOptions::default());
    let expected: Value = json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "id": "",
        "title": "Person",
        "description": "A human being",
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "website": { "oneOf": [{ "type": "null" }, { "type": "string" }] },
            "age": { "oneOf": [{ "type": "null" }, { "type": "integer" }] },
            "birth_place": {
                "oneOf": [
                    { "type": "null" },
                    {
                        "title": "BirthPlace",
                        "description": "The location of a Person's birth",
                        "type": "object",
                        "required": ["name"],
                        "properties": {
                            "name": { "type": "string", "maxLength": 30, "minLength": 1 },
                            "planet": {
                                "oneOf": [{ "type": "null" }, { "type": "string", "default": "Earth" }]
                            }
                        }
                    }
                ]
            },
            "bank_accounts": {
                "oneOf": [
                    { "type": "null" },
                    {
                        "type": "array",
                        "items": {
                            "title": "BankAccount",
                            "description": "An Account in A Bank",
                            "type": "object",
                            "required": ["account_id"],
                            "properties": {
                                "account_id": { "type": "integer", "minimum": 0 },
                                "amount": { "oneOf": [{ "type": "null" }, { "type": "number" }] }
                            }
                        }
                    }
                ]
            },
            "guitar_preference": {
                "oneOf": [
                    { "type": "null" },
                    { "type": "string", "enum": ["stratocaster", "telecaster", "gretsch"] }
                ]
            }
        }
    });
    assert_eq!(expected, actual);
}

#[test]
fn person_document_keeps_declared_key_order() {
    let actual: Value = person_document(&SchemaOptions::default());
    let top: Vec<&str> = actual
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        vec!["$schema", "id", "title", "description", "type", "required", "properties"],
        top
    );
    let properties: Vec<&str> = actual["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        vec!["name", "website", "age", "birth_place", "bank_accounts", "guitar_preference"],
        properties
    );
}

#[test]
fn sorted_text_output_is_lexicographic() {
    let mut output: Vec<u8> = Vec::new();
    generate_to_writer(
        PERSON_DEFINITION,
        &mut output,
        &SchemaOptions::default().sorted(),
    )
    .unwrap();
    let actual: String = String::from_utf8(output).unwrap();
    let expected_prefix: &str = concat!(
        r#"{"$schema":"http://json-schema.org/draft-04/schema#","description":"A human being","id":"","#,
        r#""properties":{"age":{"oneOf":[{"type":"null"},{"type":"integer"}]},"#,
        r#""bank_accounts":{"oneOf":[{"type":"null"},{"items":{"description":"An Account in A Bank","#,
        r#""properties":{"account_id":{"minimum":0,"type":"integer"},"#,
        r#""amount":{"oneOf":[{"type":"null"},{"type":"number"}]}},"#,
        r#""required":["account_id"],"title":"BankAccount","type":"object"},"type":"array"}]},"#
    );
    assert!(
        actual.starts_with(expected_prefix),
        "unexpected sorted output: {actual}"
    );
    assert!(actual.ends_with(r#""required":["name"],"title":"Person","type":"object"}"#));
}

#[test]
fn generation_is_idempotent() {
    let options: SchemaOptions = SchemaOptions::default().with_schema_id("person").sorted();
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    generate_to_writer(PERSON_DEFINITION, &mut first, &options).unwrap();
    generate_to_writer(PERSON_DEFINITION, &mut second, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nested_field_equals_direct_model_schema() {
    let document: Value = person_document(&SchemaOptions::default());
    let model: Arc<Model> = Definition::from_json(PERSON_DEFINITION)
        .unwrap()
        .resolve()
        .unwrap();
    let Some(place) = model.fields().iter().find_map(|f| match &f.field_type {
        model_schema_rs::FieldType::Nested(m) => Some(Arc::clone(m)),
        _ => None,
    }) else {
        panic!("Person must have a nested field");
    };
    let direct: Value = Value::Object(model_schema(&place, Shape::Object).unwrap());
    assert_eq!(Some(&direct), document.pointer("/properties/birth_place/oneOf/1"));
}

#[test]
fn in_memory_model_with_order_override() {
    let tag: Arc<Model> = Arc::new(
        Model::new("Tag")
            .with_metadata(Metadata::new("Tag", ""))
            .with_field(Field::leaf("label", LeafField::new(FieldKind::String)).required()),
    );
    let model: Model = Model::new("Post")
        .with_field(Field::leaf(
            "body",
            LeafField::new(FieldKind::String).with_constraints(Constraints {
                regex: Some(".+".to_string()),
                ..Constraints::default()
            }),
        ))
        .with_field(Field::list_of("tags", ListElement::Model(tag)).required())
        .with_field(Field::leaf("id", LeafField::new(FieldKind::Integer)).required())
        .with_order(["id", "tags", "body"]);

    let actual: String = to_schema_string(&model, &SchemaOptions::default()).unwrap();
    let expected: &str = concat!(
        r#"{"$schema":"http://json-schema.org/draft-04/schema#","id":"","title":"","description":"","#,
        r#""type":"object","required":["tags","id"],"properties":{"id":{"type":"integer"},"#,
        r#""tags":{"type":"array","items":{"title":"Tag","description":"","type":"object","#,
        r#""required":["label"],"properties":{"label":{"type":"string"}}}},"#,
        r#""body":{"oneOf":[{"type":"null"},{"type":"string","pattern":".+"}]}}}"#
    );
    assert_eq!(expected, actual);
}

#[test]
fn cyclic_definition_is_rejected_before_generation() {
    let definition: &str = r#"{
        "root": "Node",
        "models": { "Node": { "fields": [{ "name": "child", "type": "model", "model": "Node" }] } }
    }"#;
    let mut output: Vec<u8> = Vec::new();
    let err: ModelSchemaError =
        generate_to_writer(definition, &mut output, &SchemaOptions::default()).unwrap_err();
    assert!(matches!(err, ModelSchemaError::CyclicModel(_)));
    assert!(output.is_empty());
}

#[test]
fn invalid_order_writes_nothing() {
    let definition: &str = r#"{
        "root": "A",
        "models": { "A": { "order": ["missing"], "fields": [{ "name": "x", "type": "int" }] } }
    }"#;
    let mut output: Vec<u8> = Vec::new();
    let err: ModelSchemaError =
        generate_to_writer(definition, &mut output, &SchemaOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ModelSchemaError::UnknownOrderedProperty { ref property, .. } if property == "missing"
    ));
    assert!(output.is_empty());
}

#[test]
fn generate_from_file_writes_schema() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("person.json");
    let output = dir.path().join("person.schema.json");
    std::fs::write(&input, PERSON_DEFINITION).unwrap();

    generate_from_file(
        &input,
        &output,
        &SchemaOptions::default().with_schema_id("urn:person").pretty(),
    )
    .unwrap();

    let written: String = std::fs::read_to_string(&output).unwrap();
    assert!(written.ends_with("}\n"));
    let actual: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(Some(&json!("urn:person")), actual.get("id"));
    assert_eq!(
        person_document(&SchemaOptions::default().with_schema_id("urn:person")),
        actual
    );
}

#[test]
fn generate_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err: ModelSchemaError = generate_from_file(
        dir.path().join("absent.json"),
        dir.path().join("out.json"),
        &SchemaOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ModelSchemaError::IoError(_)));
    assert!(!dir.path().join("out.json").exists());
}
