//! Function and method extraction for C / C++

use super::helpers;
use super::CppExtractor;
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

const CLASS_KINDS: &[&str] = &["class_specifier", "struct_specifier", "union_specifier"];

impl CppExtractor {
    /// Extract a function_definition (free function, inline method, or out-of-line `Type::method`)
    pub(super) fn extract_function(&self, node: Node) -> Option<SymbolRecord> {
        let declarator = helpers::find_function_declarator(node)?;
        let (name, scope) = helpers::declarator_name(&self.base, declarator)?;

        let parent = scope.or_else(|| self.enclosing_class_name(&node));
        let construct = if parent.is_some() { "method" } else { "function" };

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Function,
            construct,
            SymbolOptions {
                parameters: helpers::extract_parameters(&self.base, declarator),
                parent,
                ..Default::default()
            },
        ))
    }

    /// Class whose field_declaration_list directly holds this definition
    fn enclosing_class_name(&self, node: &Node) -> Option<String> {
        let mut list = node.parent()?;
        // template <typename T> void f() inside a class body
        if list.kind() == "template_declaration" {
            list = list.parent()?;
        }
        if list.kind() != "field_declaration_list" {
            return None;
        }
        let class = list.parent().filter(|c| CLASS_KINDS.contains(&c.kind()))?;
        class
            .child_by_field_name("name")
            .and_then(|name| self.base.static_name(&name))
    }
}
