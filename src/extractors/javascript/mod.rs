//! JavaScript / TypeScript Extractor
//!
//! One walker serves both grammars. TypeScript adds interfaces, abstract
//! classes, enums and typed parameters; everything else is shared.

mod functions;
mod helpers;
mod imports;
mod types;

use crate::extractors::base::{BaseExtractor, Extracted};
use crate::language::LanguageTag;
use tree_sitter::{Node, Tree};

pub struct JavaScriptExtractor {
    base: BaseExtractor,
}

impl JavaScriptExtractor {
    /// `language` is either JavaScript or TypeScript
    pub fn new(language: LanguageTag, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();
        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            self.visit_node(*node, &mut extracted);
        });
        extracted
    }

    fn visit_node(&self, node: Node, extracted: &mut Extracted) {
        let symbol = match node.kind() {
            "class_declaration" | "abstract_class_declaration" | "class" => self.extract_class(node),
            "interface_declaration" => self.extract_interface(node),
            "enum_declaration" => self.extract_enum(node),
            "function_declaration" | "generator_function_declaration" => self.extract_function(node),
            "method_definition" => self.extract_method(node),
            "variable_declarator" => self.extract_function_variable(node),
            "import_statement" => {
                extracted.imports.extend(self.extract_import_source(&node));
                None
            }
            "call_expression" => {
                extracted.imports.extend(self.extract_require(&node));
                None
            }
            _ => None,
        };

        if let Some(symbol) = symbol {
            extracted.symbols.push(symbol);
        }
    }
}
