/// Class extraction for Python
/// Collects immediate method names and statically named base classes
use super::super::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use super::{helpers, PythonExtractor};
use tree_sitter::Node;

/// Extract a class definition from a class_definition node
pub(super) fn extract_class(extractor: &PythonExtractor, node: Node) -> Option<SymbolRecord> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let supertypes = node
        .child_by_field_name("superclasses")
        .map(|superclasses| extract_bases(extractor, &superclasses))
        .unwrap_or_default();

    let members = node
        .child_by_field_name("body")
        .map(|body| extract_method_names(extractor, &body))
        .unwrap_or_default();

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Type,
        "class",
        SymbolOptions {
            members,
            supertypes,
            docstring: Some(helpers::extract_docstring(extractor, &node).unwrap_or_default()),
            ..Default::default()
        },
    ))
}

/// Base classes from an argument_list; keyword arguments (`metaclass=...`),
/// calls and subscripts are skipped
fn extract_bases(extractor: &PythonExtractor, superclasses: &Node) -> Vec<String> {
    let base = extractor.base();
    let mut cursor = superclasses.walk();
    let bases = superclasses
        .named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "identifier" | "attribute"))
        .filter_map(|child| base.static_name(&child))
        .collect();
    bases
}

/// Names of functions defined directly in a class body, decorated ones included
fn extract_method_names(extractor: &PythonExtractor, body: &Node) -> Vec<String> {
    let base = extractor.base();
    let mut names = Vec::new();

    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        let definition = match child.kind() {
            "function_definition" => Some(child),
            "decorated_definition" => child
                .child_by_field_name("definition")
                .filter(|def| def.kind() == "function_definition"),
            _ => None,
        };
        if let Some(name) = definition.and_then(|def| base.get_field_text(&def, "name")) {
            names.push(name);
        }
    }

    names
}
