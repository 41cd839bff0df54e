/// Python extractor for functions, classes and imports
///
/// This module is organized into focused sub-modules:
/// - helpers: docstrings and string delimiter handling
/// - types: class extraction (members, base classes)
/// - functions: function and method extraction
/// - imports: import statement handling
pub(crate) mod functions;
pub(crate) mod helpers;
pub(crate) mod imports;
pub(crate) mod types;

use crate::extractors::base::{BaseExtractor, Extracted};
use crate::language::LanguageTag;
use tree_sitter::{Node, Tree};

pub struct PythonExtractor {
    base: BaseExtractor,
}

impl PythonExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(LanguageTag::Python, file_path, content),
        }
    }

    /// Extract all symbols and imports from a parsed Python file
    pub fn extract(&self, tree: &Tree) -> Extracted {
        let mut extracted = Extracted::default();
        self.base.traverse_tree(&tree.root_node(), &mut |node: &Node| {
            self.visit(*node, &mut extracted);
        });
        extracted
    }

    fn visit(&self, node: Node, extracted: &mut Extracted) {
        match node.kind() {
            "class_definition" => {
                if let Some(symbol) = types::extract_class(self, node) {
                    extracted.symbols.push(symbol);
                }
            }
            "function_definition" => {
                if let Some(symbol) = functions::extract_function(self, node) {
                    extracted.symbols.push(symbol);
                }
            }
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                extracted.imports.extend(imports::extract_imports(self, node));
            }
            _ => {}
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{parse_source, SymbolCategory};

    fn extract(code: &str) -> Extracted {
        let tree = parse_source(code, LanguageTag::Python, "test.py").unwrap();
        PythonExtractor::new("test.py".to_string(), code.to_string()).extract(&tree)
    }

    #[test]
    fn test_function_and_class_scenario() {
        let code = r#"
def run(a, b):
    return a + b

class Worker(BaseWorker):
    def start(self):
        pass
"#;
        let extracted = extract(code);
        let functions: Vec<_> = extracted
            .symbols
            .iter()
            .filter(|s| s.category == SymbolCategory::Function && s.parent.is_none())
            .collect();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "run");
        assert_eq!(functions[0].parameters, vec!["a", "b"]);
        assert_eq!(functions[0].source_line, 2);

        let types: Vec<_> = extracted.symbols.iter().filter(|s| s.is_type()).collect();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Worker");
        assert_eq!(types[0].members, vec!["start"]);
        assert_eq!(types[0].supertypes, vec!["BaseWorker"]);

        let start = extracted.symbols.iter().find(|s| s.name == "start").unwrap();
        assert_eq!(start.construct, "method");
        assert_eq!(start.parent.as_deref(), Some("Worker"));
    }

    #[test]
    fn test_async_and_docstrings() {
        let code = r#"
async def fetch(url, *args, timeout: int = 5, **kwargs):
    """Fetch a URL."""
    pass

class Empty:
    '''Nothing here.'''
"#;
        let extracted = extract(code);
        let fetch = extracted.symbols.iter().find(|s| s.name == "fetch").unwrap();
        assert!(fetch.is_async);
        assert_eq!(fetch.parameters, vec!["url"]);
        assert_eq!(fetch.docstring, "Fetch a URL.");

        let empty = extracted.symbols.iter().find(|s| s.name == "Empty").unwrap();
        assert!(empty.members.is_empty());
        assert!(empty.supertypes.is_empty());
        assert_eq!(empty.docstring, "Nothing here.");
    }

    #[test]
    fn test_computed_bases_are_skipped() {
        let code = r#"
class Model(models.Model, make_base(), Generic[T], metaclass=Meta):
    @property
    def name(self):
        return "m"

    def _nested(self):
        def inner():
            pass
"#;
        let extracted = extract(code);
        let model = extracted.symbols.iter().find(|s| s.name == "Model").unwrap();
        assert_eq!(model.supertypes, vec!["models.Model"]);
        assert_eq!(model.members, vec!["name", "_nested"]);

        let inner = extracted.symbols.iter().find(|s| s.name == "inner").unwrap();
        assert_eq!(inner.construct, "function");
        assert!(inner.parent.is_none());
    }

    #[test]
    fn test_imports_record_module_only() {
        let code = r#"
import os, sys as system
import xml.etree.ElementTree
from collections import OrderedDict, defaultdict
from . import sibling
from ..pkg.mod import thing
from __future__ import annotations
"#;
        let extracted = extract(code);
        assert_eq!(
            extracted.imports,
            vec![
                "os",
                "sys",
                "xml.etree.ElementTree",
                "collections",
                "pkg.mod",
                "__future__"
            ]
        );
    }

    #[test]
    fn test_keyword_only_parameters_are_not_recorded() {
        let extracted = extract("def connect(host, port=80, *, timeout, retries: int = 3):\n    pass\n");
        assert_eq!(extracted.symbols[0].parameters, vec!["host", "port"]);

        let extracted = extract("def log(level: str, *args: str, sep=' '):\n    pass\n");
        assert_eq!(extracted.symbols[0].parameters, vec!["level"]);
    }

    #[test]
    fn test_relative_imports_drop_leading_dots() {
        let extracted = extract("from . import sibling\nfrom .. import parent\nfrom .models import User\n");
        assert_eq!(extracted.imports, vec!["models"]);
    }

    #[test]
    fn test_zero_parameters() {
        let extracted = extract("def noop():\n    pass\n");
        assert!(extracted.symbols[0].parameters.is_empty());
        assert_eq!(extracted.symbols[0].docstring, "");
    }
}
