use crate::extractors::base::{SymbolCategory, SymbolOptions, SymbolRecord};
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor {
    pub(super) fn extract_function(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;
        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| self.extract_parameter_names(params))
            .unwrap_or_default();

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Function,
            "function",
            SymbolOptions {
                parameters,
                ..Default::default()
            },
        ))
    }

    /// Methods carry their receiver type as parent; the receiver is not a parameter
    pub(super) fn extract_method(&self, node: Node) -> Option<SymbolRecord> {
        let name = self.base.get_field_text(&node, "name")?;
        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| self.extract_parameter_names(params))
            .unwrap_or_default();
        let parent = node
            .child_by_field_name("receiver")
            .and_then(|receiver| self.extract_receiver_type(receiver));

        Some(self.base.create_symbol(
            &node,
            name,
            SymbolCategory::Function,
            "method",
            SymbolOptions {
                parameters,
                parent,
                ..Default::default()
            },
        ))
    }
}
