use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

/// Type declaration extraction for Go (structs and interfaces)
impl super::GoExtractor {
    /// `type X struct {...}` / `type X interface {...}`; other type specs are skipped
    pub(super) fn extract_type_spec(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;
        let type_def = node.child_by_field_name("type")?;

        let (construct, options) = match type_def.kind() {
            "struct_type" => (
                "struct",
                SymbolOptions {
                    supertypes: self.extract_embedded_fields(type_def),
                    ..Default::default()
                },
            ),
            "interface_type" => {
                let (members, supertypes) = self.extract_interface_elements(type_def);
                (
                    "interface",
                    SymbolOptions {
                        members,
                        supertypes,
                        ..Default::default()
                    },
                )
            }
            _ => return None,
        };

        Some(
            self.base
                .create_symbol(&node, name, SymbolCategory::Type, construct, options),
        )
    }

    /// Embedded struct fields (`Base`, `*Base`, `io.Reader`) act as supertypes
    fn extract_embedded_fields(&self, struct_type: Node) -> Vec<String> {
        let Some(fields) = struct_type
            .named_children(&mut struct_type.walk())
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return Vec::new();
        };

        fields
            .named_children(&mut fields.walk())
            .filter(|field| {
                field.kind() == "field_declaration" && field.child_by_field_name("name").is_none()
            })
            .filter_map(|field| field.child_by_field_name("type"))
            .filter_map(|ty| self.base.static_name(&ty))
            .collect()
    }

    /// Method names and embedded interfaces of an interface body
    fn extract_interface_elements(&self, interface_type: Node) -> (Vec<String>, Vec<String>) {
        let mut members = Vec::new();
        let mut supertypes = Vec::new();

        let mut cursor = interface_type.walk();
        for child in interface_type.named_children(&mut cursor) {
            match child.kind() {
                "method_elem" => members.extend(self.base.get_field_text(&child, "name")),
                // A single-term type_elem embeds an interface; unions are constraints
                "type_elem" if child.named_child_count() == 1 => {
                    if let Some(embedded) = child.named_child(0) {
                        supertypes.extend(self.base.static_name(&embedded));
                    }
                }
                _ => {}
            }
        }

        (members, supertypes)
    }
}
