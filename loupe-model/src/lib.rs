//! Program-element graph model for the Loupe source-generator facade.
//!
//! This crate provides the data types a compiler front-end uses to describe
//! the program elements (packages, classes, methods, parameters) that a
//! source generator wants to inspect. The types are plain data: the facade
//! crate (`loupe-codegen`) only ever borrows a finished graph and never
//! writes back into it.
//!
//! # Architecture
//!
//! ```text
//! compiler front-end → loupe-model (element graph) → loupe-codegen (views, fragments)
//! ```
//!
//! The model types are designed to be:
//! - Front-end agnostic (no assumptions about how the graph was produced)
//! - Append-only (elements are inserted once and never mutated)
//! - Upward-navigable (enclosing links are ids, never owned back-references)

mod annotation;
mod element;
mod session;

pub use annotation::Annotation;
pub use element::{Element, ElementGraph, ElementId, ElementKind, Modifier};
pub use session::Session;
