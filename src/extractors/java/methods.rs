/// Method and constructor extraction
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// Extract a method or constructor declaration
pub(super) fn extract_method(
    extractor: &JavaExtractor,
    node: Node,
    construct: &str,
) -> Option<SymbolRecord> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Function,
        construct,
        SymbolOptions {
            parameters: helpers::extract_parameters(base, node),
            parent: helpers::enclosing_type_name(base, node),
            ..Default::default()
        },
    ))
}
