//! Per-run compiler session data.

use std::collections::HashMap;

use crate::ElementId;

/// Data the front-end exposes per generation session rather than per
/// element. Doc comments live here: the compiler keeps them next to the
/// session, not inside the element records.
#[derive(Debug, Clone, Default)]
pub struct Session {
    doc_comments: HashMap<ElementId, String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the doc comment for an element.
    pub fn set_doc_comment(&mut self, element: ElementId, text: impl Into<String>) {
        self.doc_comments.insert(element, text.into());
    }

    /// Look up the doc comment for an element.
    pub fn doc_comment(&self, element: ElementId) -> Option<&str> {
        self.doc_comments.get(&element).map(String::as_str)
    }
}
