// Parser construction
//
// One tree-sitter parser per call; parsers are cheap and not shared across
// extraction workers.

use anyhow::{anyhow, Result};
use tree_sitter::{Parser, Tree};

use crate::language::{get_tree_sitter_language, LanguageTag};

/// Parse `content` with the grammar for `language`
pub fn parse_source(content: &str, language: LanguageTag, file_path: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let tree_sitter_language = get_tree_sitter_language(language, file_path)?;

    parser
        .set_language(&tree_sitter_language)
        .map_err(|e| anyhow!("Failed to set parser language for {}: {}", language, e))?;

    parser
        .parse(content, None)
        .ok_or_else(|| anyhow!("Failed to parse file: {}", file_path))
}
