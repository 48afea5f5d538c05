//! Element graph: the program elements a front-end hands to the facade.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Annotation;

/// Category of a program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Package,
    Class,
    Interface,
    Enum,
    Annotation,
    Constructor,
    Method,
    Field,
    Parameter,
}

impl ElementKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Package => "package",
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Annotation => "annotation",
            ElementKind::Constructor => "constructor",
            ElementKind::Method => "method",
            ElementKind::Field => "field",
            ElementKind::Parameter => "parameter",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration modifier attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    /// Get the lowercase string representation (the source-text keyword).
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to one element inside an [`ElementGraph`].
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u32);

impl ElementId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One program element: a package, type, callable, field, or parameter.
///
/// Every element carries the same record shape; fields that only apply to
/// some kinds (declared type text, return type, varargs) stay at their
/// defaults elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Element category.
    pub kind: ElementKind,
    /// Unqualified name (e.g., "Widget", "render", "count").
    pub simple_name: String,
    /// Dotted qualified name; packages carry this, other kinds leave it unset.
    #[serde(default)]
    pub qualified_name: Option<String>,
    /// Declaration modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Enclosing element, if any. Set by [`ElementGraph::insert_in`].
    #[serde(default)]
    pub enclosing: Option<ElementId>,
    /// Directly enclosed elements, declaration order.
    #[serde(default)]
    pub enclosed: Vec<ElementId>,
    /// Annotations attached to this element, declaration order.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Declared type text of a parameter or field (e.g., "java.lang.String").
    #[serde(default)]
    pub type_name: Option<String>,
    /// Return type text of a method.
    #[serde(default)]
    pub return_type: Option<String>,
    /// Whether a method accepts a variable number of trailing arguments.
    #[serde(default)]
    pub varargs: bool,
}

impl Element {
    /// Create a new element of the given kind and simple name.
    pub fn new(kind: ElementKind, simple_name: impl Into<String>) -> Self {
        Self {
            kind,
            simple_name: simple_name.into(),
            qualified_name: None,
            modifiers: Vec::new(),
            enclosing: None,
            enclosed: Vec::new(),
            annotations: Vec::new(),
            type_name: None,
            return_type: None,
            varargs: false,
        }
    }

    /// Set the dotted qualified name (packages).
    pub fn qualified(mut self, name: impl Into<String>) -> Self {
        self.qualified_name = Some(name.into());
        self
    }

    /// Add a declaration modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Attach an annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the declared type text (parameters and fields).
    pub fn typed(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the return type text (methods).
    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    /// Mark a method as accepting variable trailing arguments.
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    /// Check whether a modifier is present.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// Append-only arena holding one program-element graph.
///
/// The enclosing/enclosed relation is cyclic when followed in both
/// directions, so both directions are stored as ids into the arena rather
/// than as owned references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementGraph {
    elements: Vec<Element>,
}

impl ElementGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level element (no enclosing scope).
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    /// Insert an element enclosed in `parent`, wiring both direction links.
    pub fn insert_in(&mut self, parent: ElementId, element: Element) -> ElementId {
        let mut element = element;
        element.enclosing = Some(parent);
        let id = self.insert(element);
        self.elements[parent.index()].enclosed.push(id);
        id
    }

    /// Get the element behind an id issued by this graph.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    /// Get the enclosing element id, if any.
    pub fn enclosing(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).enclosing
    }

    /// Directly enclosed element ids, declaration order.
    pub fn enclosed(&self, id: ElementId) -> &[ElementId] {
        &self.element(id).enclosed
    }

    /// Enclosed element ids of one kind, declaration order.
    pub fn enclosed_of_kind(&self, id: ElementId, kind: ElementKind) -> Vec<ElementId> {
        self.enclosed(id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).kind == kind)
            .collect()
    }

    /// Number of elements in the graph.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
