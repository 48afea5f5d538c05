//! Enclosing-scope queries over the element graph.

use loupe_model::{ElementGraph, ElementId, ElementKind};
use tracing::trace;

use crate::error::{Error, Result};

/// Walk the enclosing-scope chain until an element of `kind` is found.
///
/// The walk starts at `element` itself, so an element of the requested kind
/// matches immediately. Running out of enclosing elements is caller misuse
/// (e.g., asking a top-level package for its enclosing class) and fails.
pub fn find_enclosing(
    graph: &ElementGraph,
    element: ElementId,
    kind: ElementKind,
) -> Result<ElementId> {
    let mut current = Some(element);
    while let Some(id) = current {
        if graph.element(id).kind == kind {
            return Ok(id);
        }
        current = graph.enclosing(id);
    }
    trace!(kind = kind.as_str(), "enclosing-scope walk exhausted");
    Err(Error::EnclosingNotFound {
        kind,
        element: graph.element(element).simple_name.clone(),
    })
}

/// Name of the enclosing scope of `kind`.
///
/// Packages are identified by their dotted qualified path, every other kind
/// by its simple name: generated source refers to a package by its full
/// path and to a type by the name used inside its compilation unit.
pub fn scope_name(graph: &ElementGraph, element: ElementId, kind: ElementKind) -> Result<String> {
    let scope = find_enclosing(graph, element, kind)?;
    let scope = graph.element(scope);
    let name = match kind {
        ElementKind::Package => scope
            .qualified_name
            .clone()
            .unwrap_or_else(|| scope.simple_name.clone()),
        _ => scope.simple_name.clone(),
    };
    Ok(name)
}
