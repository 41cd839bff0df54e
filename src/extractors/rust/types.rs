/// Rust type definitions extraction
/// - Structs, enums and unions
/// - Traits (with supertraits and declared methods)
use super::helpers::function_names;
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use crate::extractors::rust::RustExtractor;
use tree_sitter::Node;

/// Extract struct, enum or union definition
///
/// Members and supertypes are filled in later from impl blocks.
pub(super) fn extract_data_type(
    extractor: &RustExtractor,
    node: Node,
    construct: &str,
) -> Option<SymbolRecord> {
    let base = extractor.get_base();
    let name = base.get_field_text(&node, "name")?;

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Type,
        construct,
        SymbolOptions::default(),
    ))
}

/// Extract trait definition
pub(super) fn extract_trait(extractor: &RustExtractor, node: Node) -> Option<SymbolRecord> {
    let base = extractor.get_base();
    let name = base.get_field_text(&node, "name")?;

    // trait Worker: Send + fmt::Debug + 'static
    let supertypes = node
        .child_by_field_name("bounds")
        .map(|bounds| {
            bounds
                .named_children(&mut bounds.walk())
                .filter_map(|bound| base.static_name(&bound))
                .collect()
        })
        .unwrap_or_default();

    let members = node
        .child_by_field_name("body")
        .map(|body| function_names(base, body))
        .unwrap_or_default();

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Type,
        "trait",
        SymbolOptions {
            members,
            supertypes,
            ..Default::default()
        },
    ))
}
