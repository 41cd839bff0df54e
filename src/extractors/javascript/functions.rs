//! Function extraction for JavaScript / TypeScript
//!
//! Declarations, class methods, and arrow functions or function expressions
//! bound to a variable.

use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

impl super::JavaScriptExtractor {
    /// `function run(a, b) {}` and `function* gen() {}`
    pub(super) fn extract_function(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;
        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Function,
            "function",
            SymbolOptions {
                parameters: self.extract_parameters(&node),
                is_async: self.is_async(&node),
                ..Default::default()
            },
        ))
    }

    /// Methods inside a class body (object literal methods have no class parent)
    pub(super) fn extract_method(&self, node: Node) -> Option<SymbolRecord> {
        let name_node = node.child_by_field_name("name")?;
        // Computed names (`[Symbol.iterator]()`) are not static identifiers
        if name_node.kind() == "computed_property_name" {
            return None;
        }
        let name = self.base.get_node_text(&name_node);
        let parent = self.enclosing_class_name(&node);

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Function,
            "method",
            SymbolOptions {
                parameters: self.extract_parameters(&node),
                is_async: self.is_async(&node),
                parent,
                ..Default::default()
            },
        ))
    }

    /// `const handler = async (req) => {}` / `var f = function () {}`
    pub(super) fn extract_function_variable(&self, node: Node) -> Option<SymbolRecord> {
        let name_node = node.child_by_field_name("name")?;
        if name_node.kind() != "identifier" {
            return None;
        }
        let value = node.child_by_field_name("value")?;
        let construct = match value.kind() {
            "arrow_function" => "arrow_function",
            "function_expression" | "function" | "generator_function" => "function",
            _ => return None,
        };

        Some(self.base.create_symbol(
            &node,
            self.base.get_node_text(&name_node),
            SymbolCategory::Function,
            construct,
            SymbolOptions {
                parameters: self.extract_parameters(&value),
                is_async: self.is_async(&value),
                ..Default::default()
            },
        ))
    }
}
