//! Annotation views: decoding member values from their literal text.

use loupe_model::Annotation;

use crate::error::Result;
use crate::views::TextView;

/// Conventional single-member name looked up when none is given.
const DEFAULT_MEMBER: &str = "value";

/// View over one annotation instance.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationView<'a> {
    annotation: &'a Annotation,
}

impl<'a> AnnotationView<'a> {
    /// Create a view over an annotation instance.
    pub fn new(annotation: &'a Annotation) -> Self {
        Self { annotation }
    }

    /// Fully qualified type name of the annotation.
    pub fn type_name(&self) -> &'a str {
        &self.annotation.type_name
    }

    /// String value of the conventional `value` member.
    pub fn string_value(&self) -> Result<Option<String>> {
        self.string_value_named(DEFAULT_MEMBER)
    }

    /// String value of a named member.
    ///
    /// `None` when the annotation has no such member. A present member's
    /// literal text is unquoted: `"\"apple\""` decodes to `"apple"`.
    pub fn string_value_named(&self, member: &str) -> Result<Option<String>> {
        match self.annotation.value(member) {
            Some(literal) => TextView::new(literal).unquoted().map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::*;

    #[test]
    fn test_string_value_defaults_to_value_member() {
        let annotation = Annotation::new("com.example.Handler").member("value", "\"apple\"");
        let view = crate::views::annotation_view(&annotation);
        assert_eq!(view.string_value().unwrap().as_deref(), Some("apple"));
    }

    #[test]
    fn test_string_value_named() {
        let annotation = Annotation::new("com.example.Handler")
            .member("value", "\"apple\"")
            .member("path", "\"a/b\"");
        let view = AnnotationView::new(&annotation);
        assert_eq!(
            view.string_value_named("path").unwrap().as_deref(),
            Some("a/b")
        );
    }

    #[test]
    fn test_missing_member_is_absent_not_an_error() {
        let annotation = Annotation::new("com.example.Handler");
        let view = AnnotationView::new(&annotation);
        assert_eq!(view.string_value().unwrap(), None);
        assert_eq!(view.string_value_named("anything").unwrap(), None);
    }

    #[test]
    fn test_too_short_literal_fails() {
        let annotation = Annotation::new("com.example.Handler").member("value", "x");
        let view = AnnotationView::new(&annotation);
        let err = view.string_value().unwrap_err();
        assert!(matches!(err, Error::MalformedLiteral { .. }));
    }
}
