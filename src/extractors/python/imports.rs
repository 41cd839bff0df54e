/// Import statement extraction
/// One raw module name per target; from-imports record the module path only,
/// without relative-import dots
use super::PythonExtractor;
use tree_sitter::Node;

/// Extract module names from an import, from-import or `__future__` import
pub fn extract_imports(extractor: &PythonExtractor, node: Node) -> Vec<String> {
    let base = extractor.base();

    match node.kind() {
        "import_statement" => {
            let mut modules = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    // import module
                    "dotted_name" => modules.push(base.get_node_text(&child)),
                    // import module as alias
                    "aliased_import" => {
                        if let Some(name) = base.get_field_text(&child, "name") {
                            modules.push(name);
                        }
                    }
                    _ => {}
                }
            }
            modules
        }
        // from module import a, b
        "import_from_statement" => {
            let Some(module) = node.child_by_field_name("module_name") else {
                return Vec::new();
            };
            match module.kind() {
                // from ..pkg.mod import x records `pkg.mod`; from . import x has no module
                "relative_import" => base
                    .find_child_by_type(&module, "dotted_name")
                    .map(|name| base.get_node_text(&name))
                    .into_iter()
                    .collect(),
                _ => vec![base.get_node_text(&module)],
            }
        }
        "future_import_statement" => vec!["__future__".to_string()],
        _ => Vec::new(),
    }
}
