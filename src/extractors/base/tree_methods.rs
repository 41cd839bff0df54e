// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tracing::{debug, warn};
use tree_sitter::Node;

/// Leaf kinds that name something without computation
const NAME_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "property_identifier",
    "field_identifier",
    "namespace_identifier",
    "package_identifier",
    "primitive_type",
    "crate",
    "self",
    "super",
];

/// Dotted or scoped chains of names (`models.Model`, `std::fmt::Display`, `pkg.Type`)
const CHAIN_KINDS: &[&str] = &[
    "attribute",
    "dotted_name",
    "member_expression",
    "nested_identifier",
    "nested_type_identifier",
    "qualified_type",
    "scoped_type_identifier",
    "scoped_identifier",
    "qualified_identifier",
];

/// Parameterized types that reduce to their base name (`List<T>` → `List`)
const GENERIC_KINDS: &[&str] = &["generic_type", "template_type", "generic_type_with_turbofish"];

impl BaseExtractor {
    /// Pre-order traversal with error handling
    ///
    /// Iterative over a `TreeCursor`, so nesting depth never grows the call
    /// stack. A node whose callback panics is logged and its subtree skipped.
    pub fn traverse_tree<F>(&self, node: &Node, callback: &mut F)
    where
        F: FnMut(&Node),
    {
        let mut cursor = node.walk();
        loop {
            let current = cursor.node();
            let visited =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback(&current))).is_ok();
            if !visited {
                warn!("Error processing node {}", current.kind());
            }

            if visited && cursor.goto_first_child() {
                continue;
            }

            // Next sibling of the nearest ancestor that has one, without leaving `node`
            loop {
                if cursor.depth() == 0 {
                    return;
                }
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    debug!("Cursor left the traversal root");
                    return;
                }
            }
        }
    }

    /// Position (1-based line, 1-based column) of the first ERROR or MISSING node
    pub fn first_syntax_error(root: &Node) -> Option<(usize, usize)> {
        if !root.has_error() {
            return None;
        }

        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                let pos = node.start_position();
                return Some((pos.row + 1, pos.column + 1));
            }

            // Only descend into subtrees that contain the error
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    let pos = root.start_position();
                    return Some((pos.row + 1, pos.column + 1));
                }
            }
        }
    }

    /// Name of a statically named type reference, `None` for computed expressions
    pub fn static_name(&self, node: &Node) -> Option<String> {
        let kind = node.kind();

        if NAME_KINDS.contains(&kind) {
            let text = self.get_node_text(node);
            return (!text.is_empty()).then_some(text);
        }

        if GENERIC_KINDS.contains(&kind) {
            let base = node
                .child_by_field_name("name")
                .or_else(|| node.child_by_field_name("type"))
                .or_else(|| node.named_child(0))?;
            return self.static_name(&base);
        }

        if CHAIN_KINDS.contains(&kind) {
            let separator = if matches!(
                kind,
                "scoped_identifier" | "scoped_type_identifier" | "qualified_identifier"
            ) && self.get_node_text(node).contains("::")
            {
                "::"
            } else {
                "."
            };

            let mut parts = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind().contains("comment") {
                    continue;
                }
                parts.push(self.static_name(&child)?);
            }
            return (!parts.is_empty()).then(|| parts.join(separator));
        }

        None
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        self.find_child_by_types(node, &[child_type])
    }

    /// Find child by multiple types
    pub fn find_child_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Option<Node<'a>> {
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if types.contains(&child.kind()) {
                    return Some(child);
                }
            }
        }
        None
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Walk up to the nearest ancestor of one of the given kinds
    pub fn find_parent_of_types<'a>(&self, node: &Node<'a>, kinds: &[&str]) -> Option<Node<'a>> {
        let mut current = node.parent();
        while let Some(parent) = current {
            if kinds.contains(&parent.kind()) {
                return Some(parent);
            }
            current = parent.parent();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::parse_source;
    use crate::language::LanguageTag;

    #[test]
    fn test_static_name_skips_computed_bases() {
        let code = "class Model(models.Model, Generic[T], make_base()):\n    pass\n";
        let tree = parse_source(code, LanguageTag::Python, "models.py").unwrap();
        let base = BaseExtractor::new(LanguageTag::Python, "models.py".to_string(), code.to_string());

        let class = tree.root_node().named_child(0).unwrap();
        let args = class.child_by_field_name("superclasses").unwrap();
        let names: Vec<Option<String>> = args
            .named_children(&mut args.walk())
            .map(|arg| base.static_name(&arg))
            .collect();
        assert_eq!(names, vec![Some("models.Model".to_string()), None, None]);
    }

    #[test]
    fn test_traverse_tree_pre_order_within_subtree() {
        let code = "x = 1\ny = 2\n";
        let tree = parse_source(code, LanguageTag::Python, "vars.py").unwrap();
        let base = BaseExtractor::new(LanguageTag::Python, "vars.py".to_string(), code.to_string());

        let first = tree.root_node().named_child(0).unwrap();
        let mut kinds = Vec::new();
        base.traverse_tree(&first, &mut |node: &Node| kinds.push(node.kind().to_string()));
        assert_eq!(kinds, vec!["expression_statement", "assignment", "identifier", "=", "integer"]);
    }

    #[test]
    fn test_traverse_tree_skips_subtree_after_panic() {
        let code = "x = 1\ny = 2\n";
        let tree = parse_source(code, LanguageTag::Python, "vars.py").unwrap();
        let base = BaseExtractor::new(LanguageTag::Python, "vars.py".to_string(), code.to_string());

        let mut kinds = Vec::new();
        base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            kinds.push(node.kind().to_string());
            if node.kind() == "assignment" {
                panic!("assignment");
            }
        });
        assert_eq!(
            kinds,
            vec!["module", "expression_statement", "assignment", "expression_statement", "assignment"]
        );
    }

    #[test]
    fn test_first_syntax_error_position() {
        let valid = parse_source("def ok():\n    pass\n", LanguageTag::Python, "ok.py").unwrap();
        assert_eq!(BaseExtractor::first_syntax_error(&valid.root_node()), None);

        let broken = parse_source("x = 1\ndef broken(:\n", LanguageTag::Python, "bad.py").unwrap();
        let (line, _) = BaseExtractor::first_syntax_error(&broken.root_node()).unwrap();
        assert!(line >= 2);
    }
}
