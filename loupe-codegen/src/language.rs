//! Rendering conventions of the target source language.

/// Target-language constants used when rendering declaration fragments.
///
/// Defines which namespace needs no import in generated source, and how an
/// array-typed final parameter is rewritten into variadic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderProfile {
    /// Namespace prefix whose members need no import (e.g., "java.lang.").
    pub implicit_prefix: &'static str,
    /// Two-character "array of" marker ending a declared type (e.g., "[]").
    pub array_suffix: &'static str,
    /// Marker appended in place of the array suffix on a variadic parameter.
    pub variadic_suffix: &'static str,
}

impl RenderProfile {
    /// Java rendering conventions.
    pub const JAVA: Self = Self {
        implicit_prefix: "java.lang.",
        array_suffix: "[]",
        variadic_suffix: " ...",
    };

    /// Strip the implicit-import prefix when the type text starts with it.
    ///
    /// Any other prefix leaves the text unchanged: only the leading
    /// occurrence of the implicit namespace is implicit.
    pub fn strip_implicit<'t>(&self, type_name: &'t str) -> &'t str {
        type_name
            .strip_prefix(self.implicit_prefix)
            .unwrap_or(type_name)
    }

    /// Rewrite an array-typed declaration into variadic form.
    ///
    /// `"T[]"` becomes `"T ..."`; text that does not end with the array
    /// suffix is returned unchanged.
    pub fn variadic_declaration(&self, type_name: &str) -> String {
        match type_name.strip_suffix(self.array_suffix) {
            Some(base) => format!("{}{}", base, self.variadic_suffix),
            None => type_name.to_string(),
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self::JAVA
    }
}
