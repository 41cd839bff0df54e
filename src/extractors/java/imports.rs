/// Import declaration extraction
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

/// `import java.util.List;` → `java.util.List`, `import static a.B.*;` → `a.B.*`
pub(super) fn extract_import(extractor: &JavaExtractor, node: Node) -> Option<String> {
    let path = node
        .named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;

    let mut module = extractor.base().get_node_text(&path);
    if node.children(&mut node.walk()).any(|c| c.kind() == "asterisk") {
        module.push_str(".*");
    }
    Some(module)
}
