//! Typed element views and source-fragment rendering for source generators.
//!
//! This crate is the facade over a [`loupe_model::ElementGraph`]: a
//! generator obtains a typed view over one element, asks it
//! category-appropriate questions, and gets back plain strings and lists
//! ready to splice into generated source. The facade only ever reads the
//! graph; emitting files is the caller's business.
//!
//! # Module Organization
//!
//! - [`views`] - Typed views per element category and the [`Symbol`] union
//! - [`query`] - Enclosing-scope walks and scope names
//! - [`language`] - Target-language rendering constants ([`RenderProfile`])
//! - [`template`] - `#name#` placeholder substitution
//! - [`session`] - Thread-local binding of the current compiler session
//!
//! # Example
//!
//! ```
//! use loupe_model::{Element, ElementGraph, ElementKind};
//! use loupe_codegen::method_view;
//!
//! let mut graph = ElementGraph::new();
//! let class = graph.insert(Element::new(ElementKind::Class, "Widget"));
//! let render = graph.insert_in(class, Element::new(ElementKind::Method, "render"));
//! graph.insert_in(
//!     render,
//!     Element::new(ElementKind::Parameter, "label").typed("java.lang.String"),
//! );
//!
//! let method = method_view(&graph, render);
//! assert_eq!(method.declaration_argument_list(), "String label");
//! assert_eq!(method.call_argument_list(), "label");
//! ```

pub mod language;
pub mod query;
pub mod session;
pub mod template;
pub mod views;

mod error;

pub use error::{Error, Result};
pub use language::RenderProfile;
pub use views::{
    AnnotationView, MethodView, Symbol, SymbolKind, TextView, TypeView, annotation_view,
    method_view, text_view, type_view,
};
