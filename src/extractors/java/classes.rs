/// Class, interface, enum, and record extraction
use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// Extract a class, enum or record declaration
pub(super) fn extract_class(
    extractor: &JavaExtractor,
    node: Node,
    construct: &str,
) -> Option<SymbolRecord> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let mut supertypes: Vec<String> = helpers::extract_superclass(base, node).into_iter().collect();
    supertypes.extend(helpers::extract_implemented_interfaces(base, node));

    let members = node
        .child_by_field_name("body")
        .map(|body| helpers::extract_member_names(base, body))
        .unwrap_or_default();

    // Records declare their components like parameters
    let parameters = if construct == "record" {
        helpers::extract_parameters(base, node)
    } else {
        Vec::new()
    };

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Type,
        construct,
        SymbolOptions {
            parameters,
            members,
            supertypes,
            ..Default::default()
        },
    ))
}

/// Extract interface declaration from a node
pub(super) fn extract_interface(extractor: &JavaExtractor, node: Node) -> Option<SymbolRecord> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let members = node
        .child_by_field_name("body")
        .map(|body| helpers::extract_member_names(base, body))
        .unwrap_or_default();

    Some(base.create_symbol(
        &node,
        name,
        SymbolCategory::Type,
        "interface",
        SymbolOptions {
            members,
            supertypes: helpers::extract_extended_interfaces(base, node),
            ..Default::default()
        },
    ))
}
