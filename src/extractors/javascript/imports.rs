//! Import extraction for JavaScript
//!
//! Handles ES6 import statements and CommonJS requires. Only the module
//! specifier is recorded, never the imported bindings.

use tree_sitter::Node;

impl super::JavaScriptExtractor {
    /// `import x from 'mod'` / `import 'side-effect'`
    pub(super) fn extract_import_source(&self, node: &Node) -> Option<String> {
        node.child_by_field_name("source")
            .map(|source| self.string_value(&source))
    }

    /// `require('mod')` with a literal argument
    pub(super) fn extract_require(&self, node: &Node) -> Option<String> {
        let function = node.child_by_field_name("function")?;
        if function.kind() != "identifier" || self.base.get_node_text(&function) != "require" {
            return None;
        }

        let arguments = node.child_by_field_name("arguments")?;
        let first = arguments.named_child(0).filter(|arg| arg.kind() == "string")?;
        Some(self.string_value(&first))
    }
}
