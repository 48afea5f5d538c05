//! Typed views over program elements.
//!
//! Each view wraps exactly one underlying element category and exposes only
//! the operations valid for it: using the concrete view structs, a
//! wrong-category call does not compile. [`Symbol`] is the tagged union over
//! the four categories for callers that dispatch at runtime; there the
//! wrong-category call is an explicit [`CategoryMismatch`] check.
//!
//! [`CategoryMismatch`]: crate::Error::CategoryMismatch

mod annotation;
mod method;
mod text;
mod type_;

use std::fmt;

use loupe_model::{Annotation, ElementGraph, ElementId};

pub use annotation::AnnotationView;
pub use method::MethodView;
pub use text::TextView;
pub use type_::TypeView;

use crate::error::{Error, Result};

/// Create a view over a type element.
pub fn type_view(graph: &ElementGraph, element: ElementId) -> TypeView<'_> {
    TypeView::new(graph, element)
}

/// Create a view over a method element and its parameters.
pub fn method_view(graph: &ElementGraph, element: ElementId) -> MethodView<'_> {
    MethodView::new(graph, element)
}

/// Create a view over an annotation instance.
pub fn annotation_view(annotation: &Annotation) -> AnnotationView<'_> {
    AnnotationView::new(annotation)
}

/// Create a view over a plain string.
pub fn text_view(text: &str) -> TextView<'_> {
    TextView::new(text)
}

/// Category of a symbol view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Type,
    Method,
    Annotation,
    Text,
}

impl SymbolKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Method => "method",
            SymbolKind::Annotation => "annotation",
            SymbolKind::Text => "text",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view of any category, for callers that dispatch at runtime.
#[derive(Debug, Clone)]
pub enum Symbol<'a> {
    /// View over a type element.
    Type(TypeView<'a>),
    /// View over a method element.
    Method(MethodView<'a>),
    /// View over an annotation instance.
    Annotation(AnnotationView<'a>),
    /// View over a plain string.
    Text(TextView<'a>),
}

impl<'a> Symbol<'a> {
    /// Category of this symbol.
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Type(_) => SymbolKind::Type,
            Symbol::Method(_) => SymbolKind::Method,
            Symbol::Annotation(_) => SymbolKind::Annotation,
            Symbol::Text(_) => SymbolKind::Text,
        }
    }

    /// Get the type view, failing on any other category.
    pub fn as_type(&self) -> Result<&TypeView<'a>> {
        match self {
            Symbol::Type(view) => Ok(view),
            _ => Err(self.mismatch("as_type", SymbolKind::Type)),
        }
    }

    /// Get the method view, failing on any other category.
    pub fn as_method(&self) -> Result<&MethodView<'a>> {
        match self {
            Symbol::Method(view) => Ok(view),
            _ => Err(self.mismatch("as_method", SymbolKind::Method)),
        }
    }

    /// Get the annotation view, failing on any other category.
    pub fn as_annotation(&self) -> Result<&AnnotationView<'a>> {
        match self {
            Symbol::Annotation(view) => Ok(view),
            _ => Err(self.mismatch("as_annotation", SymbolKind::Annotation)),
        }
    }

    /// Get the text view, failing on any other category.
    pub fn as_text(&self) -> Result<&TextView<'a>> {
        match self {
            Symbol::Text(view) => Ok(view),
            _ => Err(self.mismatch("as_text", SymbolKind::Text)),
        }
    }

    fn mismatch(&self, operation: &'static str, expected: SymbolKind) -> Error {
        Error::CategoryMismatch {
            operation,
            expected,
            actual: self.kind(),
        }
    }
}

impl<'a> From<TypeView<'a>> for Symbol<'a> {
    fn from(view: TypeView<'a>) -> Self {
        Symbol::Type(view)
    }
}

impl<'a> From<MethodView<'a>> for Symbol<'a> {
    fn from(view: MethodView<'a>) -> Self {
        Symbol::Method(view)
    }
}

impl<'a> From<AnnotationView<'a>> for Symbol<'a> {
    fn from(view: AnnotationView<'a>) -> Self {
        Symbol::Annotation(view)
    }
}

impl<'a> From<TextView<'a>> for Symbol<'a> {
    fn from(view: TextView<'a>) -> Self {
        Symbol::Text(view)
    }
}
