/// Rust function and method extraction
use super::helpers::{extract_parameters, is_async};
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use crate::extractors::rust::RustExtractor;
use tree_sitter::Node;

/// Extract a function_item; inside an impl or trait body it is a method
pub(super) fn extract_function(extractor: &RustExtractor, node: Node) -> Option<SymbolRecord> {
    let base = extractor.get_base();
    let name = base.get_field_text(&node, "name")?;

    let parent = owner_name(extractor, node);
    let construct = if parent.is_some() { "method" } else { "function" };

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Function,
        construct,
        SymbolOptions {
            parameters: extract_parameters(base, node),
            is_async: is_async(node),
            parent,
            ..Default::default()
        },
    ))
}

/// Type of the enclosing `impl Type` block, or the enclosing trait's name
fn owner_name(extractor: &RustExtractor, node: Node) -> Option<String> {
    let base = extractor.get_base();
    let body = node.parent().filter(|p| p.kind() == "declaration_list")?;
    let owner = body.parent()?;
    match owner.kind() {
        "impl_item" => owner
            .child_by_field_name("type")
            .and_then(|ty| base.static_name(&ty)),
        "trait_item" => base.get_field_text(&owner, "name"),
        _ => None,
    }
}
