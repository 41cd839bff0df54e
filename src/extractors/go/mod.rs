mod functions;
mod helpers;
mod types;

use crate::extractors::base::{BaseExtractor, Extracted, SymbolRecord};
use crate::language::LanguageTag;
use tree_sitter::{Node, Tree};

/// Go language extractor that handles Go-specific constructs including:
/// - Structs and interfaces (embedding recorded as supertypes)
/// - Functions and methods with receivers
/// - Imports
///
/// Struct members are the methods declared with that struct as receiver
/// in the same file.
pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(LanguageTag::Go, file_path, content),
        }
    }

    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();

        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            match node.kind() {
                "import_declaration" => {
                    extracted.imports.extend(self.extract_import_paths(*node));
                }
                "function_declaration" => extracted.symbols.extend(self.extract_function(*node)),
                "method_declaration" => extracted.symbols.extend(self.extract_method(*node)),
                "type_spec" => extracted.symbols.extend(self.extract_type_spec(*node)),
                _ => {}
            }
        });

        Self::attach_methods(&mut extracted.symbols);
        extracted
    }

    /// Copy method names onto the struct records they are declared on
    fn attach_methods(symbols: &mut [SymbolRecord]) {
        let methods: Vec<(String, String)> = symbols
            .iter()
            .filter(|s| s.construct == "method")
            .filter_map(|s| Some((s.parent.clone()?, s.name.clone())))
            .collect();

        for (receiver, method) in methods {
            if let Some(target) = symbols
                .iter_mut()
                .find(|s| s.construct == "struct" && s.name == receiver)
            {
                target.members.push(method);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{parse_source, SymbolCategory};

    fn extract(code: &str) -> Extracted {
        let tree = parse_source(code, LanguageTag::Go, "main.go").unwrap();
        GoExtractor::new("main.go".to_string(), code.to_string()).extract(&tree)
    }

    #[test]
    fn test_go_scenario() {
        let code = r#"
package main

import (
	"fmt"
	log "github.com/sirupsen/logrus"
)

func run(a, b int) int {
	return a + b
}

// Worker processes jobs.
type Worker struct {
	BaseWorker
	id int
}

func (w *Worker) Start(ctx context.Context) {
	fmt.Println("start")
}
"#;
        let extracted = extract(code);
        assert_eq!(extracted.imports, vec!["fmt", "github.com/sirupsen/logrus"]);

        let run = extracted.symbols.iter().find(|s| s.name == "run").unwrap();
        assert_eq!(run.category, SymbolCategory::Function);
        assert_eq!(run.parameters, vec!["a", "b"]);
        assert_eq!(run.source_line, 9);

        let worker = extracted.symbols.iter().find(|s| s.name == "Worker").unwrap();
        assert_eq!(worker.construct, "struct");
        assert_eq!(worker.supertypes, vec!["BaseWorker"]);
        assert_eq!(worker.members, vec!["Start"]);
        assert_eq!(worker.docstring, "Worker processes jobs.");

        let start = extracted.symbols.iter().find(|s| s.name == "Start").unwrap();
        assert_eq!(start.construct, "method");
        assert_eq!(start.parent.as_deref(), Some("Worker"));
        assert_eq!(start.parameters, vec!["ctx"]);
    }

    #[test]
    fn test_interfaces() {
        let code = r#"
package store

import "io"

type ReadCloser interface {
	io.Reader
	Close() error
}

type Number interface {
	int | float64
}

type ID string
"#;
        let extracted = extract(code);
        assert_eq!(extracted.imports, vec!["io"]);

        let rc = extracted.symbols.iter().find(|s| s.name == "ReadCloser").unwrap();
        assert_eq!(rc.construct, "interface");
        assert_eq!(rc.members, vec!["Close"]);
        assert_eq!(rc.supertypes, vec!["io.Reader"]);

        let number = extracted.symbols.iter().find(|s| s.name == "Number").unwrap();
        assert!(number.supertypes.is_empty());

        assert!(extracted.symbols.iter().all(|s| s.name != "ID"));
    }
}
