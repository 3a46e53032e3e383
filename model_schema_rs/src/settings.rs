//! Options for schema document generation.

/// Options that control the generated document and its text encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Emitted as the document's `id`. `None` emits an empty string.
    pub schema_id: Option<String>,

    /// When true, every object's keys are sorted lexicographically in the
    /// encoded text. Does not change the document structure.
    ///
    /// **Default: false.** Keys keep their generation order.
    pub sort_keys: bool,

    /// When true, the encoded text is indented; otherwise it is compact.
    pub pretty: bool,
}

impl SchemaOptions {
    #[must_use]
    pub fn with_schema_id(mut self, schema_id: impl Into<String>) -> Self {
        self.schema_id = Some(schema_id.into());
        self
    }

    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort_keys = true;
        self
    }

    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}
