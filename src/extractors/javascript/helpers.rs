//! Utility helper functions for JavaScript extraction
//!
//! Async detection, parameter names, string literal unquoting and
//! enclosing-class lookup, shared by the function and type walkers.

use tree_sitter::Node;

const CLASS_KINDS: &[&str] = &["class_declaration", "abstract_class_declaration", "class"];

impl super::JavaScriptExtractor {
    /// Check if a function-like node carries the `async` keyword
    pub(super) fn is_async(&self, node: &Node) -> bool {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).any(|c| c.kind() == "async");
        found
    }

    /// Parameter names of a function-like node
    ///
    /// Rest parameters and destructuring patterns have no single name and are
    /// not recorded.
    pub(super) fn extract_parameters(&self, node: &Node) -> Vec<String> {
        // Arrow functions with one bare parameter: `x => x * 2`
        if let Some(single) = node.child_by_field_name("parameter") {
            return self.parameter_name(&single).into_iter().collect();
        }

        let Some(params) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut cursor = params.walk();
        let names = params
            .named_children(&mut cursor)
            .filter_map(|param| self.parameter_name(&param))
            .collect();
        names
    }

    fn parameter_name(&self, param: &Node) -> Option<String> {
        match param.kind() {
            "identifier" => Some(self.base.get_node_text(param)),
            // JS default value: `b = 1`
            "assignment_pattern" => param
                .child_by_field_name("left")
                .filter(|left| left.kind() == "identifier")
                .map(|left| self.base.get_node_text(&left)),
            // TS: `b: number`, `b?: number`, `private b: number`
            "required_parameter" | "optional_parameter" => param
                .child_by_field_name("pattern")
                .filter(|pattern| pattern.kind() == "identifier")
                .map(|pattern| self.base.get_node_text(&pattern)),
            _ => None,
        }
    }

    /// Strip quotes from a string literal node
    pub(super) fn string_value(&self, node: &Node) -> String {
        self.base
            .get_node_text(node)
            .trim_matches(|c| c == '\'' || c == '"' || c == '`')
            .to_string()
    }

    /// Name of the class whose body directly holds this member
    pub(super) fn enclosing_class_name(&self, node: &Node) -> Option<String> {
        let body = node.parent().filter(|p| p.kind() == "class_body")?;
        let class = body.parent().filter(|c| CLASS_KINDS.contains(&c.kind()))?;
        self.base.get_field_text(&class, "name")
    }
}
