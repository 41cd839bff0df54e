//! Class, interface and enum extraction for JavaScript / TypeScript

use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

/// Class body entries that count as methods
const METHOD_KINDS: &[&str] = &[
    "method_definition",
    "abstract_method_signature",
    "method_signature",
];

impl super::JavaScriptExtractor {
    pub(super) fn extract_class(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;

        let supertypes = self
            .base
            .find_child_by_type(&node, "class_heritage")
            .map(|heritage| self.extract_heritage(&heritage))
            .unwrap_or_default();

        let members = node
            .child_by_field_name("body")
            .map(|body| self.extract_member_names(&body))
            .unwrap_or_default();

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Type,
            "class",
            SymbolOptions {
                members,
                supertypes,
                ..Default::default()
            },
        ))
    }

    /// TypeScript `interface Shape extends Named { area(): number }`
    pub(super) fn extract_interface(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;

        let supertypes = self
            .base
            .find_child_by_type(&node, "extends_type_clause")
            .map(|clause| self.static_type_list(&clause))
            .unwrap_or_default();

        let members = node
            .child_by_field_name("body")
            .map(|body| self.extract_member_names(&body))
            .unwrap_or_default();

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Type,
            "interface",
            SymbolOptions {
                members,
                supertypes,
                ..Default::default()
            },
        ))
    }

    pub(super) fn extract_enum(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;
        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Type,
            "enum",
            SymbolOptions::default(),
        ))
    }

    /// Base names from a class_heritage node
    ///
    /// JavaScript puts the expression straight after `extends`; TypeScript
    /// wraps it in extends_clause / implements_clause.
    fn extract_heritage(&self, heritage: &Node) -> Vec<String> {
        let mut supertypes = Vec::new();
        let mut cursor = heritage.walk();

        for child in heritage.named_children(&mut cursor) {
            match child.kind() {
                "extends_clause" => {
                    let mut value_cursor = child.walk();
                    supertypes.extend(
                        child
                            .children_by_field_name("value", &mut value_cursor)
                            .filter_map(|value| self.base.static_name(&value)),
                    );
                }
                "implements_clause" => supertypes.extend(self.static_type_list(&child)),
                _ => supertypes.extend(self.base.static_name(&child)),
            }
        }

        supertypes
    }

    fn static_type_list(&self, clause: &Node) -> Vec<String> {
        let mut cursor = clause.walk();
        let names = clause
            .named_children(&mut cursor)
            .filter_map(|ty| self.base.static_name(&ty))
            .collect();
        names
    }

    fn extract_member_names(&self, body: &Node) -> Vec<String> {
        let mut cursor = body.walk();
        let names = body
            .named_children(&mut cursor)
            .filter(|member| METHOD_KINDS.contains(&member.kind()))
            .filter_map(|member| member.child_by_field_name("name"))
            .filter(|name| name.kind() != "computed_property_name")
            .map(|name| self.base.get_node_text(&name))
            .collect();
        names
    }
}
