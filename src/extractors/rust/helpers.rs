/// Helper utilities for Rust extractor
/// - Impl block tracking
/// - Parameter and modifier extraction
/// - Use-declaration paths
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What one `impl` block contributes to the type it targets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImplBlockInfo {
    pub type_name: String,
    /// `impl Trait for Type`
    pub trait_name: Option<String>,
    pub methods: Vec<String>,
}

/// Collect target type, trait and method names of an impl_item
pub(super) fn extract_impl_block(base: &BaseExtractor, node: Node) -> Option<ImplBlockInfo> {
    let type_name = node
        .child_by_field_name("type")
        .and_then(|ty| base.static_name(&ty))?;
    let trait_name = node
        .child_by_field_name("trait")
        .and_then(|tr| base.static_name(&tr));
    let methods = node
        .child_by_field_name("body")
        .map(|body| function_names(base, body))
        .unwrap_or_default();

    Some(ImplBlockInfo {
        type_name,
        trait_name,
        methods,
    })
}

/// Names of functions declared directly in a declaration_list
pub(super) fn function_names(base: &BaseExtractor, body: Node) -> Vec<String> {
    body.named_children(&mut body.walk())
        .filter(|c| matches!(c.kind(), "function_item" | "function_signature_item"))
        .filter_map(|c| base.get_field_text(&c, "name"))
        .collect()
}

/// Parameter names; `self` receivers are recorded as `self`
pub(super) fn extract_parameters(base: &BaseExtractor, node: Node) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for param in params.named_children(&mut params.walk()) {
        match param.kind() {
            "self_parameter" => names.push("self".to_string()),
            "parameter" => {
                if let Some(name) = param
                    .child_by_field_name("pattern")
                    .and_then(|pattern| pattern_identifier(base, pattern))
                {
                    names.push(name);
                }
            }
            _ => {}
        }
    }
    names
}

/// `x` or `mut x`; destructuring patterns have no single name
fn pattern_identifier(base: &BaseExtractor, pattern: Node) -> Option<String> {
    match pattern.kind() {
        "identifier" => Some(base.get_node_text(&pattern)),
        "mut_pattern" => pattern
            .named_children(&mut pattern.walk())
            .find(|c| c.kind() == "identifier")
            .map(|c| base.get_node_text(&c)),
        _ => None,
    }
}

/// Check for `async` among the function modifiers
pub(super) fn is_async(node: Node) -> bool {
    node.children(&mut node.walk())
        .filter(|c| c.kind() == "function_modifiers")
        .any(|modifiers| {
            modifiers
                .children(&mut modifiers.walk())
                .any(|m| m.kind() == "async")
        })
}

/// Module path named by a use declaration
///
/// `use std::io::{self, Read}` → `std::io`, `use a::b as c` → `a::b`,
/// `use tokio::prelude::*` → `tokio::prelude`
pub(super) fn use_path(base: &BaseExtractor, node: Node) -> Option<String> {
    let argument = node.child_by_field_name("argument")?;
    match argument.kind() {
        "scoped_use_list" | "use_as_clause" => base.get_field_text(&argument, "path"),
        "use_wildcard" => argument
            .named_child(0)
            .map(|path| base.get_node_text(&path)),
        _ => Some(base.get_node_text(&argument)),
    }
}
