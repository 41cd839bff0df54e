//! C / C++ extractor
//!
//! The two grammars share their node vocabulary for everything extracted
//! here, so one walker serves both languages:
//! - helpers: declarators, parameters, base classes
//! - types: class/struct/union/enum extraction
//! - functions: function and method extraction

mod functions;
mod helpers;
mod types;

use crate::extractors::base::{BaseExtractor, Extracted, SymbolRecord};
use crate::language::LanguageTag;
use tree_sitter::{Node, Tree};

pub struct CppExtractor {
    base: BaseExtractor,
}

impl CppExtractor {
    /// `language` is either C or Cpp
    pub fn new(language: LanguageTag, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();
        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            if node.kind() == "preproc_include" {
                extracted.imports.extend(self.extract_include(node));
            } else if let Some(symbol) = self.extract_symbol(*node) {
                extracted.symbols.push(symbol);
            }
        });
        extracted
    }

    fn extract_symbol(&self, node: Node) -> Option<SymbolRecord> {
        match node.kind() {
            "function_definition" => self.extract_function(node),
            "class_specifier" => self.extract_type(node, "class"),
            "struct_specifier" => self.extract_type(node, "struct"),
            "union_specifier" => self.extract_type(node, "union"),
            "enum_specifier" => self.extract_type(node, "enum"),
            _ => None,
        }
    }

    /// `#include <stdio.h>` → `stdio.h`, `#include "worker.h"` → `worker.h`
    fn extract_include(&self, node: &Node) -> Option<String> {
        let path = node.child_by_field_name("path")?;
        let text = self.base.get_node_text(&path);
        Some(text.trim_matches(|c| c == '"' || c == '<' || c == '>').to_string())
    }
}
