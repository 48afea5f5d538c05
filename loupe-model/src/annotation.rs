//! Annotation instances attached to program elements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One annotation instance: its type name and member values.
///
/// Member values are stored as the literal source text of the value, quotes
/// included (e.g., a string member holds `"\"apple\""`). Decoding the
/// literal is the facade's job, not the model's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully qualified annotation type name (e.g., "com.example.Handler").
    pub type_name: String,
    /// Member name → literal value text, declaration order.
    #[serde(default)]
    pub values: IndexMap<String, String>,
}

impl Annotation {
    /// Create an annotation instance with no member values.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            values: IndexMap::new(),
        }
    }

    /// Add a member with its literal value text.
    pub fn member(mut self, name: impl Into<String>, literal: impl Into<String>) -> Self {
        self.values.insert(name.into(), literal.into());
        self
    }

    /// Look up a member's literal value text.
    pub fn value(&self, member: &str) -> Option<&str> {
        self.values.get(member).map(String::as_str)
    }
}
