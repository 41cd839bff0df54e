/// Rust language extractor with support for:
/// - Structs, enums, unions, traits
/// - Functions and methods in impl / trait bodies
/// - `use` and `extern crate` imports
/// - Two-phase processing: extract symbols → fold impl blocks into their types
use crate::extractors::base::{BaseExtractor, Extracted, SymbolRecord};
use crate::language::LanguageTag;
use tracing::debug;
use tree_sitter::{Node, Tree};

// Private modules
mod functions;
mod helpers;
mod types;

pub use self::helpers::ImplBlockInfo;

/// Rust extractor that handles Rust-specific constructs
pub struct RustExtractor {
    base: BaseExtractor,
}

impl RustExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(LanguageTag::Rust, file_path, content),
        }
    }

    /// Extract symbols using two-phase approach
    /// Phase 1: Extract definitions and collect impl blocks
    /// Phase 2: Attach impl methods and implemented traits to types in this file
    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();
        let mut impl_blocks = Vec::new();

        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            match node.kind() {
                "impl_item" => impl_blocks.extend(helpers::extract_impl_block(&self.base, *node)),
                "use_declaration" => extracted.imports.extend(helpers::use_path(&self.base, *node)),
                "extern_crate_declaration" => extracted
                    .imports
                    .extend(self.base.get_field_text(node, "name")),
                _ => extracted.symbols.extend(self.extract_symbol(*node)),
            }
        });

        Self::process_impl_blocks(&impl_blocks, &mut extracted.symbols);
        extracted
    }

    fn extract_symbol(&self, node: Node) -> Option<SymbolRecord> {
        match node.kind() {
            "function_item" => functions::extract_function(self, node),
            "struct_item" => types::extract_data_type(self, node, "struct"),
            "enum_item" => types::extract_data_type(self, node, "enum"),
            "union_item" => types::extract_data_type(self, node, "union"),
            "trait_item" => types::extract_trait(self, node),
            _ => None,
        }
    }

    /// Impls of types defined elsewhere stay unattached
    fn process_impl_blocks(impl_blocks: &[ImplBlockInfo], symbols: &mut [SymbolRecord]) {
        for block in impl_blocks {
            let target = symbols
                .iter_mut()
                .find(|s| s.is_type() && s.construct != "trait" && s.name == block.type_name);

            let Some(target) = target else {
                debug!("impl for {} has no local type definition", block.type_name);
                continue;
            };

            target.members.extend(block.methods.iter().cloned());
            if let Some(trait_name) = &block.trait_name {
                if !target.supertypes.contains(trait_name) {
                    target.supertypes.push(trait_name.clone());
                }
            }
        }
    }

    pub(super) fn get_base(&self) -> &BaseExtractor {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{parse_source, SymbolCategory};

    fn extract(code: &str) -> Extracted {
        let tree = parse_source(code, LanguageTag::Rust, "src/main.rs").unwrap();
        RustExtractor::new("src/main.rs".to_string(), code.to_string()).extract(&tree)
    }

    #[test]
    fn test_rust_scenario() {
        let code = r#"
use std::collections::HashMap;
use std::io::{self, Read};
extern crate serde;

pub fn run(a: i32, mut b: i32) -> i32 {
    a + b
}

/// A background worker.
#[derive(Debug)]
pub struct Worker {
    id: u32,
}

impl BaseWorker for Worker {
    fn start(&self) {}
}
"#;
        let extracted = extract(code);
        assert_eq!(extracted.imports, vec!["std::collections::HashMap", "std::io", "serde"]);

        let run = extracted.symbols.iter().find(|s| s.name == "run").unwrap();
        assert_eq!(run.category, SymbolCategory::Function);
        assert_eq!(run.parameters, vec!["a", "b"]);

        let worker = extracted.symbols.iter().find(|s| s.name == "Worker").unwrap();
        assert_eq!(worker.construct, "struct");
        assert_eq!(worker.members, vec!["start"]);
        assert_eq!(worker.supertypes, vec!["BaseWorker"]);
        assert_eq!(worker.docstring, "A background worker.");

        let start = extracted.symbols.iter().find(|s| s.name == "start").unwrap();
        assert_eq!(start.construct, "method");
        assert_eq!(start.parent.as_deref(), Some("Worker"));
        assert_eq!(start.parameters, vec!["self"]);
    }

    #[test]
    fn test_traits_and_async() {
        let code = r#"
trait Service: Send + std::fmt::Debug + 'static {
    fn name(&self) -> String;
    async fn call(&self, req: Request) -> Response { todo!() }
}

enum State { Idle, Busy }

impl<T> Cache<T> {
    fn get(&self) {}
}
"#;
        let extracted = extract(code);
        let service = extracted.symbols.iter().find(|s| s.name == "Service").unwrap();
        assert_eq!(service.construct, "trait");
        assert_eq!(service.supertypes, vec!["Send", "std::fmt::Debug"]);
        assert_eq!(service.members, vec!["name", "call"]);

        let call = extracted.symbols.iter().find(|s| s.name == "call").unwrap();
        assert!(call.is_async);
        assert_eq!(call.parent.as_deref(), Some("Service"));

        let state = extracted.symbols.iter().find(|s| s.name == "State").unwrap();
        assert!(state.members.is_empty());

        // Cache is defined elsewhere: its method is still a symbol
        let get = extracted.symbols.iter().find(|s| s.name == "get").unwrap();
        assert_eq!(get.parent.as_deref(), Some("Cache"));
    }

    #[test]
    fn test_sample_repository_file() {
        let code = include_str!("../../../test_samples/lib.rs");
        let extracted = extract(code);
        assert_eq!(extracted.imports, vec!["std::collections::HashMap"]);

        let repo = extracted.symbols.iter().find(|s| s.name == "InMemoryRepo").unwrap();
        assert_eq!(repo.members, vec!["new", "find_user", "save_user"]);
        assert_eq!(repo.supertypes, vec!["UserRepository"]);

        let user_repository = extracted
            .symbols
            .iter()
            .find(|s| s.name == "UserRepository")
            .unwrap();
        assert_eq!(user_repository.construct, "trait");
        assert_eq!(user_repository.members, vec!["find_user", "save_user"]);

        let validate = extracted.symbols.iter().find(|s| s.name == "validate_email").unwrap();
        assert_eq!(validate.parameters, vec!["email"]);
        assert!(validate.parent.is_none());
    }
}
