use loupe_model::ElementKind;
use miette::Diagnostic;
use thiserror::Error;

use crate::views::SymbolKind;

/// Result type for loupe-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the facade.
///
/// Every variant is a caller-contract violation: all data is already
/// resident in memory, so nothing here is transient or retryable. The
/// documented absence cases (missing doc comment, missing annotation
/// member, missing attached annotation) are `""`/`None`, never errors.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no enclosing {kind} for element '{element}'")]
    #[diagnostic(
        code(loupe::enclosing_not_found),
        help("the enclosing-scope chain ran out before a match; check which element the view was created from")
    )]
    EnclosingNotFound { kind: ElementKind, element: String },

    #[error("parameter index {index} out of range for method '{method}' with {count} parameters")]
    #[diagnostic(code(loupe::parameter_index_out_of_range))]
    ParameterIndexOutOfRange {
        method: String,
        index: usize,
        count: usize,
    },

    #[error("substitute was called with an odd number of strings ({count})")]
    #[diagnostic(
        code(loupe::odd_substitution_arguments),
        help("arguments alternate placeholder name, replacement value; every name needs a value")
    )]
    OddSubstitutionArguments { count: usize },

    #[error("literal '{literal}' is too short to unquote")]
    #[diagnostic(
        code(loupe::malformed_literal),
        help("unquoting chops one leading and one trailing character, so the literal must be at least two characters long")
    )]
    MalformedLiteral { literal: String },

    #[error("placeholder name '{name}' is not usable as a pattern")]
    #[diagnostic(
        code(loupe::invalid_placeholder),
        help("restrict placeholder names to letters, digits, and underscores")
    )]
    InvalidPlaceholder { name: String },

    #[error("{operation} is a {expected}-view operation, but this symbol is a {actual} view")]
    #[diagnostic(code(loupe::category_mismatch))]
    CategoryMismatch {
        operation: &'static str,
        expected: SymbolKind,
        actual: SymbolKind,
    },
}
