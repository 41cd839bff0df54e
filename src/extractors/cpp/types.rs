//! Class / struct / union / enum extraction for C and C++
//!
//! Only specifiers with a body are definitions; `struct Foo;` and
//! `struct Foo *ptr` are references and produce nothing.

use super::helpers;
use super::CppExtractor;
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

impl CppExtractor {
    pub(super) fn extract_type(&self, node: Node, construct: &str) -> Option<SymbolRecord> {
        let body = node.child_by_field_name("body")?;
        let name = node
            .child_by_field_name("name")
            .and_then(|name| self.base.static_name(&name))?;

        let supertypes = self
            .base
            .find_child_by_type(&node, "base_class_clause")
            .map(|clause| helpers::extract_base_classes(&self.base, clause))
            .unwrap_or_default();

        let members = if construct == "enum" {
            Vec::new()
        } else {
            self.extract_member_names(body)
        };

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Type,
            construct,
            SymbolOptions {
                members,
                supertypes,
                ..Default::default()
            },
        ))
    }

    /// Inline method definitions and method declarations in a class body
    fn extract_member_names(&self, body: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = body.walk();

        for child in body.named_children(&mut cursor) {
            let member = if child.kind() == "template_declaration" {
                child
                    .named_children(&mut child.walk())
                    .find(|c| matches!(c.kind(), "function_definition" | "field_declaration" | "declaration"))
            } else {
                Some(child)
            };

            let Some(member) = member else { continue };
            if !matches!(
                member.kind(),
                "function_definition" | "field_declaration" | "declaration"
            ) {
                continue;
            }

            if let Some((name, _)) = helpers::find_function_declarator(member)
                .and_then(|declarator| helpers::declarator_name(&self.base, declarator))
            {
                names.push(name);
            }
        }

        names
    }
}
