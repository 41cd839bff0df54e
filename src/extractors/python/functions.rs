/// Function and method extraction
/// Handles regular functions, async functions and method detection
use super::super::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use super::{helpers, PythonExtractor};
use tree_sitter::Node;

/// Extract a function definition (`def` or `async def`)
pub fn extract_function(extractor: &PythonExtractor, node: Node) -> Option<SymbolRecord> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| extract_parameters(extractor, &params))
        .unwrap_or_default();

    let is_async = has_async_keyword(&node);
    let parent = enclosing_class(extractor, &node);
    let construct = if parent.is_some() { "method" } else { "function" };

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Function,
        construct,
        SymbolOptions {
            parameters,
            docstring: Some(helpers::extract_docstring(extractor, &node).unwrap_or_default()),
            is_async,
            parent,
            ..Default::default()
        },
    ))
}

/// Extract parameter names from a parameters node
///
/// Only positional parameters are recorded: everything from `*args` or a bare
/// `*` onward is keyword-only, and `**kwargs` and the `/` separator are skipped.
pub fn extract_parameters(extractor: &PythonExtractor, parameters_node: &Node) -> Vec<String> {
    let mut params = Vec::new();
    let base = extractor.base();

    let mut cursor = parameters_node.walk();
    for child in parameters_node.children(&mut cursor) {
        match child.kind() {
            "identifier" => params.push(base.get_node_text(&child)),
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = child.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        params.push(base.get_node_text(&name));
                    }
                }
            }
            "typed_parameter" => match child.named_child(0) {
                Some(first) if first.kind() == "identifier" => {
                    params.push(base.get_node_text(&first))
                }
                // `*args: int`
                Some(first) if first.kind() == "list_splat_pattern" => break,
                _ => {}
            },
            "list_splat_pattern" | "keyword_separator" | "*" | "dictionary_splat_pattern" => break,
            _ => {}
        }
    }

    params
}

/// Check if a function has an async keyword
pub(super) fn has_async_keyword(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == "async");
    found
}

/// Name of the class whose body directly defines this function
fn enclosing_class(extractor: &PythonExtractor, node: &Node) -> Option<String> {
    let scope = extractor
        .base()
        .find_parent_of_types(node, &["class_definition", "function_definition"])?;
    if scope.kind() == "class_definition" {
        extractor.base().get_field_text(&scope, "name")
    } else {
        None
    }
}
