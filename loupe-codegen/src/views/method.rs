//! Method views: signature facts and emittable argument-list fragments.

use std::sync::OnceLock;

use loupe_model::{Annotation, ElementGraph, ElementId, ElementKind, Modifier};
use tracing::debug;

use crate::error::{Error, Result};
use crate::language::RenderProfile;
use crate::session;

/// View over a method element and its ordered parameters.
///
/// Parameter names are read once, on first use, and cached for the life of
/// the view; the underlying parameter sequence is immutable source data, so
/// the cache is never invalidated.
#[derive(Debug, Clone)]
pub struct MethodView<'g> {
    graph: &'g ElementGraph,
    element: ElementId,
    profile: RenderProfile,
    params: Vec<ElementId>,
    names: OnceLock<Vec<String>>,
}

impl<'g> MethodView<'g> {
    /// Create a view over a method element, rendering with the default
    /// (Java) profile.
    pub fn new(graph: &'g ElementGraph, element: ElementId) -> Self {
        Self {
            graph,
            element,
            profile: RenderProfile::default(),
            params: graph.enclosed_of_kind(element, ElementKind::Parameter),
            names: OnceLock::new(),
        }
    }

    /// Use a different rendering profile.
    pub fn with_profile(mut self, profile: RenderProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Number of parameters.
    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// Name of the `i`-th parameter, zero-based.
    pub fn parameter_name(&self, i: usize) -> Result<&str> {
        let names = self.parameter_names();
        names
            .get(i)
            .map(String::as_str)
            .ok_or_else(|| Error::ParameterIndexOutOfRange {
                method: self.name().to_string(),
                index: i,
                count: names.len(),
            })
    }

    /// Argument list for a call site: parameter names joined with `", "`.
    pub fn call_argument_list(&self) -> String {
        self.parameter_names().join(", ")
    }

    /// Argument list for a declaration: `<type> <name>` per parameter,
    /// joined with `", "`.
    ///
    /// Types drop the implicit-import prefix, and the final parameter of a
    /// varargs method trades its array suffix for the variadic marker, so
    /// `f(java.lang.String s, int[] rest)` declared varargs renders as
    /// `"String s, int ... rest"`.
    pub fn declaration_argument_list(&self) -> String {
        let varargs = self.graph.element(self.element).varargs;
        let last = self.params.len().saturating_sub(1);
        let mut segments = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            let declared = self
                .graph
                .element(*param)
                .type_name
                .as_deref()
                .unwrap_or_default();
            let stripped = self.profile.strip_implicit(declared);
            let rendered = if varargs && i == last {
                self.profile.variadic_declaration(stripped)
            } else {
                stripped.to_string()
            };
            segments.push(format!("{} {}", rendered, self.parameter_names()[i]));
        }
        segments.join(", ")
    }

    /// Simple name of the method.
    pub fn name(&self) -> &str {
        &self.graph.element(self.element).simple_name
    }

    /// Return type as declared type text.
    pub fn return_type_name(&self) -> &str {
        self.graph
            .element(self.element)
            .return_type
            .as_deref()
            .unwrap_or_default()
    }

    /// Whether the method is abstract.
    pub fn is_abstract(&self) -> bool {
        self.graph
            .element(self.element)
            .has_modifier(Modifier::Abstract)
    }

    /// Doc comment of the method, looked up through the current session.
    ///
    /// Empty when the session has no comment for this method, or when no
    /// session is bound on the calling thread.
    pub fn doc_comment(&self) -> String {
        session::current()
            .and_then(|session| session.doc_comment(self.element).map(str::to_string))
            .unwrap_or_default()
    }

    /// Annotations of each parameter, declaration order.
    pub fn parameter_annotations(&self) -> Vec<&'g [Annotation]> {
        self.params
            .iter()
            .map(|param| self.graph.element(*param).annotations.as_slice())
            .collect()
    }

    fn parameter_names(&self) -> &[String] {
        self.names.get_or_init(|| {
            debug!(method = self.name(), "caching parameter names");
            self.params
                .iter()
                .map(|param| self.graph.element(*param).simple_name.clone())
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use loupe_model::{Element, Session};

    use super::*;

    fn method_with_params(
        varargs: bool,
        params: &[(&str, &str)],
    ) -> (ElementGraph, ElementId) {
        let mut graph = ElementGraph::new();
        let class = graph.insert(Element::new(ElementKind::Class, "Widget"));
        let mut method = Element::new(ElementKind::Method, "render").returns("void");
        if varargs {
            method = method.varargs();
        }
        let method = graph.insert_in(class, method);
        for (ty, name) in params {
            graph.insert_in(method, Element::new(ElementKind::Parameter, *name).typed(*ty));
        }
        (graph, method)
    }

    #[test]
    fn test_parameter_count_and_names() {
        let (graph, method) = method_with_params(false, &[("int", "width"), ("int", "height")]);
        let view = MethodView::new(&graph, method);

        assert_eq!(view.parameter_count(), 2);
        assert_eq!(view.parameter_name(0).unwrap(), "width");
        assert_eq!(view.parameter_name(1).unwrap(), "height");
    }

    #[test]
    fn test_parameter_name_out_of_range() {
        let (graph, method) = method_with_params(false, &[("int", "width")]);
        let view = MethodView::new(&graph, method);

        let err = view.parameter_name(1).unwrap_err();
        assert!(matches!(
            err,
            Error::ParameterIndexOutOfRange {
                index: 1,
                count: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_call_argument_list() {
        let (graph, method) = method_with_params(false, &[("int", "width"), ("int", "height")]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.call_argument_list(), "width, height");

        let (graph, method) = method_with_params(false, &[]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.call_argument_list(), "");
    }

    #[test]
    fn test_declaration_argument_list_strips_implicit_prefix() {
        let (graph, method) = method_with_params(
            false,
            &[("java.lang.String", "label"), ("java.util.List", "items")],
        );
        let view = MethodView::new(&graph, method);
        assert_eq!(
            view.declaration_argument_list(),
            "String label, java.util.List items"
        );
    }

    #[test]
    fn test_declaration_argument_list_converts_trailing_vararg() {
        let (graph, method) =
            method_with_params(true, &[("java.lang.String", "label"), ("int[]", "sizes")]);
        let view = MethodView::new(&graph, method);
        assert_eq!(
            view.declaration_argument_list(),
            "String label, int ... sizes"
        );
    }

    #[test]
    fn test_vararg_conversion_only_touches_last_parameter() {
        let (graph, method) =
            method_with_params(true, &[("int[]", "shape"), ("java.lang.Object[]", "rest")]);
        let view = MethodView::new(&graph, method);
        assert_eq!(
            view.declaration_argument_list(),
            "int[] shape, Object ... rest"
        );
    }

    #[test]
    fn test_custom_render_profile() {
        let (graph, method) = method_with_params(true, &[("sys.str", "name"), ("sys.obj{}", "rest")]);
        let profile = RenderProfile {
            implicit_prefix: "sys.",
            array_suffix: "{}",
            variadic_suffix: " etc",
        };
        let view = MethodView::new(&graph, method).with_profile(profile);
        assert_eq!(view.declaration_argument_list(), "str name, obj etc rest");
    }

    #[test]
    fn test_non_varargs_method_keeps_array_type() {
        let (graph, method) = method_with_params(false, &[("int[]", "sizes")]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.declaration_argument_list(), "int[] sizes");
    }

    #[test]
    fn test_varargs_method_with_no_parameters() {
        let (graph, method) = method_with_params(true, &[]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.declaration_argument_list(), "");
    }

    #[test]
    fn test_pass_through_reads() {
        let (graph, method) = method_with_params(false, &[]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.name(), "render");
        assert_eq!(view.return_type_name(), "void");
        assert!(!view.is_abstract());
    }

    #[test]
    fn test_doc_comment_defaults_to_empty() {
        let (graph, method) = method_with_params(false, &[]);
        let view = MethodView::new(&graph, method);
        assert_eq!(view.doc_comment(), "");
    }

    #[test]
    fn test_doc_comment_reads_bound_session() {
        let (graph, method) = method_with_params(false, &[]);
        let mut session = Session::new();
        session.set_doc_comment(method, "Renders the widget.");

        let view = MethodView::new(&graph, method);
        let comment = session::bind(Arc::new(session), || view.doc_comment());
        assert_eq!(comment, "Renders the widget.");
    }

    #[test]
    fn test_parameter_annotations_line_up_with_parameters() {
        let mut graph = ElementGraph::new();
        let method = graph.insert(Element::new(ElementKind::Method, "render"));
        graph.insert_in(
            method,
            Element::new(ElementKind::Parameter, "label")
                .typed("java.lang.String")
                .annotation(Annotation::new("com.example.NotNull")),
        );
        graph.insert_in(method, Element::new(ElementKind::Parameter, "count").typed("int"));

        let view = MethodView::new(&graph, method);
        let annotations = view.parameter_annotations();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].len(), 1);
        assert_eq!(annotations[0][0].type_name, "com.example.NotNull");
        assert!(annotations[1].is_empty());
    }

    #[test]
    fn test_concurrent_reads_after_first_populate() {
        let (graph, method) = method_with_params(false, &[("int", "width"), ("int", "height")]);
        let view = MethodView::new(&graph, method);
        view.parameter_name(0).unwrap();

        std::thread::scope(|scope| {
            let first = scope.spawn(|| view.parameter_name(0).unwrap().to_string());
            let second = scope.spawn(|| view.parameter_name(1).unwrap().to_string());
            assert_eq!(first.join().expect("thread join"), "width");
            assert_eq!(second.join().expect("thread join"), "height");
        });
    }
}
