/// Java extractor for classes, interfaces, enums, records, methods and imports
///
/// This module is organized into focused sub-modules:
/// - helpers: inheritance clauses, parameters, body member names
/// - classes: class, interface, enum, record extraction
/// - methods: method and constructor extraction
/// - imports: import declaration extraction
mod classes;
mod helpers;
mod imports;
mod methods;

use crate::extractors::base::{BaseExtractor, Extracted, SymbolRecord};
use crate::language::LanguageTag;
use tree_sitter::{Node, Tree};

pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(LanguageTag::Java, file_path, content),
        }
    }

    /// Extract all symbols and imports from Java source code
    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();
        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            if node.kind() == "import_declaration" {
                extracted.imports.extend(imports::extract_import(self, *node));
            } else if let Some(symbol) = self.extract_symbol(*node) {
                extracted.symbols.push(symbol);
            }
        });
        extracted
    }

    fn extract_symbol(&self, node: Node) -> Option<SymbolRecord> {
        match node.kind() {
            "class_declaration" => classes::extract_class(self, node, "class"),
            "enum_declaration" => classes::extract_class(self, node, "enum"),
            "record_declaration" => classes::extract_class(self, node, "record"),
            "interface_declaration" => classes::extract_interface(self, node),
            "method_declaration" => methods::extract_method(self, node, "method"),
            "constructor_declaration" => methods::extract_method(self, node, "constructor"),
            _ => None,
        }
    }

    pub(super) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
