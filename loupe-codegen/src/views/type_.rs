//! Type views: scope names, abstractness, member and annotation lookups.

use loupe_model::{ElementGraph, ElementId, ElementKind, Modifier};

use crate::error::Result;
use crate::query;
use crate::views::{AnnotationView, MethodView};

/// View over a type element (class, interface, enum).
#[derive(Debug, Clone, Copy)]
pub struct TypeView<'g> {
    graph: &'g ElementGraph,
    element: ElementId,
}

impl<'g> TypeView<'g> {
    /// Create a view over a type element.
    pub fn new(graph: &'g ElementGraph, element: ElementId) -> Self {
        Self { graph, element }
    }

    /// Simple name of the nearest enclosing class, including this element.
    pub fn class_name(&self) -> Result<String> {
        query::scope_name(self.graph, self.element, ElementKind::Class)
    }

    /// Dotted qualified name of the enclosing package.
    pub fn package_name(&self) -> Result<String> {
        query::scope_name(self.graph, self.element, ElementKind::Package)
    }

    /// Whether the type is abstract.
    pub fn is_abstract(&self) -> bool {
        self.graph
            .element(self.element)
            .has_modifier(Modifier::Abstract)
    }

    /// Views over the methods declared by this type, declaration order.
    pub fn methods(&self) -> Vec<MethodView<'g>> {
        self.graph
            .enclosed_of_kind(self.element, ElementKind::Method)
            .into_iter()
            .map(|method| MethodView::new(self.graph, method))
            .collect()
    }

    /// The attached annotation with the given fully qualified type name.
    pub fn annotation(&self, type_name: &str) -> Option<AnnotationView<'g>> {
        self.graph
            .element(self.element)
            .annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
            .map(AnnotationView::new)
    }

    /// Whether an annotation with the given type name is attached.
    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}
