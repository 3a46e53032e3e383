use crate::model::FieldKind;

/// Map a field kind to its JSON Schema primitive type name.
///
/// Kinds without a dedicated mapping become `"string"`; a field that declares
/// no specific leaf kind becomes `"object"`.
#[must_use]
pub fn json_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Number | FieldKind::Float | FieldKind::Decimal => "number",
        FieldKind::Integer | FieldKind::Long => "integer",
        FieldKind::Boolean => "boolean",
        FieldKind::Untyped => "object",
        FieldKind::String | FieldKind::Other(_) => "string",
    }
}
