//! JSON Pointer (RFC 6901) locations inside a generated schema document.
//!
//! Used to name the node being built in log events and error messages.
//! Segments are `/`-separated, with `~` escaped as `~0` and `/` escaped as `~1`.

use std::fmt;

/// Location of a node in the generated document. The empty pointer is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPointer(String);

impl SchemaPointer {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new pointer with `segment` appended, escaped per RFC 6901.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut path: String = String::with_capacity(self.0.len() + segment.len() + 1);
        path.push_str(&self.0);
        path.push('/');
        for c in segment.chars() {
            match c {
                '~' => path.push_str("~0"),
                '/' => path.push_str("~1"),
                other => path.push(other),
            }
        }
        Self(path)
    }

    /// Pointer to the schema of property `key` of the object node at `self`.
    #[must_use]
    pub fn property(&self, key: &str) -> Self {
        self.child("properties").child(key)
    }

    /// Pointer to the `items` schema of the array node at `self`.
    #[must_use]
    pub fn items(&self) -> Self {
        self.child("items")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "#")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
