//! Helper functions for C / C++ extraction
//! Contains utilities for declarators, parameters and base classes

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Declarator wrappers between a definition and its function_declarator
/// (`char *name()`, `T &get()`, `(*fp)()`)
const DECLARATOR_WRAPPERS: &[&str] = &[
    "pointer_declarator",
    "reference_declarator",
    "parenthesized_declarator",
    "attributed_declarator",
];

/// Follow `declarator` fields down to the function_declarator, if any
pub(super) fn find_function_declarator(node: Node) -> Option<Node> {
    let mut current = node.child_by_field_name("declarator")?;
    loop {
        if current.kind() == "function_declarator" {
            return Some(current);
        }
        if !DECLARATOR_WRAPPERS.contains(&current.kind()) {
            return None;
        }
        // reference_declarator has no field name on its inner declarator
        current = current
            .child_by_field_name("declarator")
            .or_else(|| current.named_child(0))?;
    }
}

/// Split a function declarator's name into (name, qualifying scope)
///
/// `Worker::start` gives ("start", Some("Worker")); `run` gives ("run", None).
pub(super) fn declarator_name(base: &BaseExtractor, function_declarator: Node) -> Option<(String, Option<String>)> {
    let name_node = function_declarator.child_by_field_name("declarator")?;
    split_qualified(base, name_node)
}

fn split_qualified(base: &BaseExtractor, node: Node) -> Option<(String, Option<String>)> {
    match node.kind() {
        "qualified_identifier" => {
            let name = node.child_by_field_name("name")?;
            // `ns::Worker::start`: the innermost scope is the owning type
            if name.kind() == "qualified_identifier" {
                return split_qualified(base, name);
            }
            let scope = node
                .child_by_field_name("scope")
                .and_then(|scope| base.static_name(&scope));
            Some((base.get_node_text(&name), scope))
        }
        "identifier" | "field_identifier" | "destructor_name" | "operator_name" => {
            Some((base.get_node_text(&node), None))
        }
        _ => None,
    }
}

/// Parameter names from a function_declarator; unnamed parameters,
/// `void` and `...` are not recorded
pub(super) fn extract_parameters(base: &BaseExtractor, function_declarator: Node) -> Vec<String> {
    let Some(params) = function_declarator.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if !matches!(
            param.kind(),
            "parameter_declaration" | "optional_parameter_declaration"
        ) {
            continue;
        }
        if let Some(name) = param
            .child_by_field_name("declarator")
            .and_then(|declarator| innermost_identifier(base, declarator))
        {
            names.push(name);
        }
    }
    names
}

/// `*buf`, `&out`, `items[]` → the identifier inside
fn innermost_identifier(base: &BaseExtractor, declarator: Node) -> Option<String> {
    let mut current = declarator;
    loop {
        if current.kind() == "identifier" {
            return Some(base.get_node_text(&current));
        }
        current = current
            .child_by_field_name("declarator")
            .or_else(|| current.named_child(0))?;
    }
}

/// Extract base classes from a base_class_clause node
/// Access specifiers and `virtual` are dropped; only static names are kept
pub(super) fn extract_base_classes(base: &BaseExtractor, base_clause: Node) -> Vec<String> {
    let mut cursor = base_clause.walk();
    let bases = base_clause
        .named_children(&mut cursor)
        .filter(|child| {
            matches!(
                child.kind(),
                "type_identifier" | "qualified_identifier" | "template_type"
            )
        })
        .filter_map(|child| base.static_name(&child))
        .collect();
    bases
}
