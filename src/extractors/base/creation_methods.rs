// Symbol creation methods

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{SymbolCategory, SymbolOptions, SymbolRecord};

impl BaseExtractor {
    /// Create a symbol record anchored at `node`
    ///
    /// Falls back to the preceding doc comment when no docstring is supplied.
    pub fn create_symbol(
        &self,
        node: &Node,
        name: String,
        category: SymbolCategory,
        construct: &str,
        options: SymbolOptions,
    ) -> SymbolRecord {
        let docstring = options
            .docstring
            .or_else(|| self.find_doc_comment(node))
            .unwrap_or_default();

        SymbolRecord {
            category,
            construct: construct.to_string(),
            name,
            source_line: Self::line_of(node),
            parameters: options.parameters,
            members: if category == SymbolCategory::Type {
                options.members
            } else {
                Vec::new()
            },
            supertypes: options.supertypes,
            docstring,
            is_async: options.is_async,
            parent: options.parent,
        }
    }
}
