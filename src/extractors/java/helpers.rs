/// Helper functions for Java extraction
/// Handles inheritance clauses, parameters and body member names
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Body node kinds that hold method declarations
const BODY_KINDS: &[&str] = &["class_body", "interface_body", "enum_body", "enum_body_declarations"];

/// Extract superclass from a class declaration node
pub(super) fn extract_superclass(base: &BaseExtractor, node: Node) -> Option<String> {
    let superclass_node = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "superclass")?;

    let type_node = superclass_node.named_child(0)?;
    base.static_name(&type_node)
}

/// Extract implemented interfaces from a class/enum/record (`implements A, B`)
pub(super) fn extract_implemented_interfaces(base: &BaseExtractor, node: Node) -> Vec<String> {
    extract_type_list(base, node, "super_interfaces")
}

/// Extract extended interfaces from an interface declaration (`extends A, B`)
pub(super) fn extract_extended_interfaces(base: &BaseExtractor, node: Node) -> Vec<String> {
    extract_type_list(base, node, "extends_interfaces")
}

fn extract_type_list(base: &BaseExtractor, node: Node, clause_kind: &str) -> Vec<String> {
    let clause = node
        .children(&mut node.walk())
        .find(|c| c.kind() == clause_kind);

    if let Some(clause) = clause {
        if let Some(type_list_node) = clause
            .children(&mut clause.walk())
            .find(|c| c.kind() == "type_list")
        {
            return type_list_node
                .named_children(&mut type_list_node.walk())
                .filter_map(|c| base.static_name(&c))
                .collect();
        }
    }

    Vec::new()
}

/// Parameter names; varargs (`String... rest`) are not recorded
pub(super) fn extract_parameters(base: &BaseExtractor, node: Node) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    params
        .named_children(&mut params.walk())
        .filter(|p| p.kind() == "formal_parameter")
        .filter_map(|p| base.get_field_text(&p, "name"))
        .collect()
}

/// Method and constructor names declared directly in a type body
pub(super) fn extract_member_names(base: &BaseExtractor, body: Node) -> Vec<String> {
    let mut names = Vec::new();
    for child in body.named_children(&mut body.walk()) {
        match child.kind() {
            "method_declaration" | "constructor_declaration" | "compact_constructor_declaration" => {
                if let Some(name) = base.get_field_text(&child, "name") {
                    names.push(name);
                }
            }
            // Enum methods sit one level down, after the constants
            "enum_body_declarations" => names.extend(extract_member_names(base, child)),
            _ => {}
        }
    }
    names
}

/// Name of the type whose body directly declares this method
pub(super) fn enclosing_type_name(base: &BaseExtractor, node: Node) -> Option<String> {
    let mut body = node.parent().filter(|p| BODY_KINDS.contains(&p.kind()))?;
    if body.kind() == "enum_body_declarations" {
        body = body.parent()?;
    }
    let owner = body.parent()?;
    base.get_field_text(&owner, "name")
}
