use tree_sitter::Node;

/// Helper methods for Go parameter lists, receivers and imports
impl super::GoExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node) -> String {
        self.base.get_node_text(&node)
    }

    /// Names declared by a parameter_list
    ///
    /// `(a, b int)` declares two names; unnamed `(int)` and variadic
    /// `(args ...string)` parameters contribute none.
    pub(super) fn extract_parameter_names(&self, params: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if param.kind() != "parameter_declaration" {
                continue;
            }
            let mut name_cursor = param.walk();
            for name in param.children_by_field_name("name", &mut name_cursor) {
                names.push(self.get_node_text(name));
            }
        }
        names
    }

    /// Type name of a method receiver (handle *Type, Type and Type[T])
    pub(super) fn extract_receiver_type(&self, receiver: Node) -> Option<String> {
        let param = receiver
            .named_children(&mut receiver.walk())
            .find(|c| c.kind() == "parameter_declaration")?;
        let mut ty = param.child_by_field_name("type")?;
        if ty.kind() == "pointer_type" {
            ty = ty.named_child(0)?;
        }
        self.base.static_name(&ty)
    }

    /// Import paths of an import_declaration, quotes removed
    pub(super) fn extract_import_paths(&self, node: Node) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_import_specs(node, &mut paths);
        paths
    }

    fn collect_import_specs(&self, node: Node, paths: &mut Vec<String>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => {
                    if let Some(path) = child.child_by_field_name("path") {
                        let text = self.get_node_text(path);
                        paths.push(text.trim_matches(|c| c == '"' || c == '`').to_string());
                    }
                }
                "import_spec_list" => self.collect_import_specs(child, paths),
                _ => {}
            }
        }
    }
}
