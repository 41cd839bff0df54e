/// Helper utilities for Python symbol extraction
use super::PythonExtractor;
use tree_sitter::Node;

/// Docstring of a function or class: the leading string-literal statement of its body
pub(super) fn extract_docstring(extractor: &PythonExtractor, node: &Node) -> Option<String> {
    let body_node = node.child_by_field_name("body")?;
    let first = body_node.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }

    let literal = first.named_child(0).filter(|n| n.kind() == "string")?;
    let text = extractor.base().get_node_text(&literal);
    Some(strip_string_delimiters(&text).trim().to_string())
}

/// Helper to strip string delimiters (quotes) from Python strings
/// Handles string prefixes (r, b, u, f), triple quotes and single quotes
pub fn strip_string_delimiters(s: &str) -> String {
    let s = s.trim_start_matches(['r', 'R', 'b', 'B', 'u', 'U', 'f', 'F']);

    // Try delimiters in order: triple quotes first (3 chars), then single quotes (1 char)
    let delimiters = [("\"\"\"", 3), ("'''", 3), ("\"", 1), ("'", 1)];

    for (delimiter, strip_count) in &delimiters {
        if s.starts_with(delimiter) && s.ends_with(delimiter) && s.len() >= strip_count * 2 {
            return s[*strip_count..s.len() - strip_count].to_string();
        }
    }

    // No matching delimiter found, return as-is
    s.to_string()
}
