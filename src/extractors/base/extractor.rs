// BaseExtractor implementation for genius_core
//
// Shared state and text helpers used by every syntax-tree walker.

use tree_sitter::Node;

use crate::language::LanguageTag;

/// Wrapper nodes a doc comment may precede instead of the definition itself
/// (`export function`, `template <...> class`, Go `type (...)`, JS `const f = () => {}`)
const DOC_WRAPPER_KINDS: &[&str] = &[
    "export_statement",
    "template_declaration",
    "declaration",
    "type_declaration",
    "lexical_declaration",
    "variable_declaration",
    "variable_declarator",
];

/// Base implementation for language extractors
pub struct BaseExtractor {
    pub language: LanguageTag,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: LanguageTag, file_path: String, content: String) -> Self {
        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Find the contiguous doc comments directly above a definition
    ///
    /// Comments must touch each other and the definition (no blank line in
    /// between). Rust attributes between the comment and the item are skipped.
    /// Markers are stripped from the returned text.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut anchor = *node;
        let mut comments = self.collect_preceding_comments(&anchor);

        // Climb through wrapper nodes whose own start is the real definition start
        while comments.is_empty() {
            match anchor.parent() {
                Some(parent) if DOC_WRAPPER_KINDS.contains(&parent.kind()) => {
                    anchor = parent;
                    comments = self.collect_preceding_comments(&anchor);
                }
                _ => break,
            }
        }

        if comments.is_empty() {
            return None;
        }

        // Reverse to get original order (top to bottom)
        comments.reverse();
        let cleaned = comments
            .iter()
            .map(|c| Self::strip_comment_markers(c))
            .collect::<Vec<_>>()
            .join("\n");
        let cleaned = cleaned.trim().to_string();
        (!cleaned.is_empty()).then_some(cleaned)
    }

    fn collect_preceding_comments(&self, node: &Node) -> Vec<String> {
        let mut comments = Vec::new();
        let mut expected_row = node.start_position().row;
        let mut current = node.prev_sibling();

        while let Some(sibling) = current {
            let kind = sibling.kind();
            if kind == "attribute_item" || kind == "inner_attribute_item" {
                expected_row = sibling.start_position().row;
                current = sibling.prev_sibling();
                continue;
            }
            if !kind.contains("comment") {
                break;
            }
            // Rust line doc comments own their trailing newline
            let end = sibling.end_position();
            let end_row = if end.column == 0 && end.row > sibling.start_position().row {
                end.row - 1
            } else {
                end.row
            };
            // A blank line ends the block
            if end_row + 1 < expected_row {
                break;
            }
            comments.push(self.get_node_text(&sibling));
            expected_row = sibling.start_position().row;
            current = sibling.prev_sibling();
        }

        comments
    }

    /// Remove `//`, `///`, `/** */`, leading `*` and `#` markers from comment text
    pub fn strip_comment_markers(comment: &str) -> String {
        let body = comment.trim();
        let body = body.strip_suffix("*/").unwrap_or(body);

        body.lines()
            .map(|line| {
                let line = line.trim();
                let line = ["/**", "/*!", "/*", "///", "//!", "//", "#"]
                    .iter()
                    .find_map(|marker| line.strip_prefix(marker))
                    .unwrap_or(line);
                let line = line.strip_prefix('*').unwrap_or(line);
                line.trim().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// 1-based line of a node
    pub fn line_of(node: &Node) -> u32 {
        (node.start_position().row + 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_block_comment() {
        let raw = "/**\n * Starts the worker.\n * Blocks until done.\n */";
        assert_eq!(
            BaseExtractor::strip_comment_markers(raw),
            "Starts the worker.\nBlocks until done."
        );
    }

    #[test]
    fn test_strip_line_comments() {
        assert_eq!(BaseExtractor::strip_comment_markers("/// Parse input"), "Parse input");
        assert_eq!(BaseExtractor::strip_comment_markers("// Run it"), "Run it");
        assert_eq!(BaseExtractor::strip_comment_markers("# ruby doc"), "ruby doc");
    }
}
