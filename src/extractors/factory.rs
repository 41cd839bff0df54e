//! Shared extractor factory - Single source of truth for every language
//!
//! This module owns the tag → extractor routing. It ensures the scanner, the
//! Python bindings and the tests all dispatch the same way.

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::extractors::base::{
    parse_source, BaseExtractor, Extracted, ExtractionStrategy, FileExtractionResult,
};
use crate::extractors::heuristic::HeuristicExtractor;
use crate::extractors::SymbolExtractor;
use crate::language::LanguageTag;

/// Walk a parsed tree with the extractor for `language`
///
/// # Parameters
/// - `tree`: Pre-parsed tree-sitter AST, free of syntax errors
/// - `file_path`: Path recorded on the extractor
/// - `content`: Source code the tree was parsed from
/// - `language`: Tag with a grammar
pub fn extract_symbols(
    tree: &tree_sitter::Tree,
    file_path: &str,
    content: &str,
    language: LanguageTag,
) -> Result<Extracted> {
    // Single match statement for every grammar-backed language
    let extracted = match language {
        LanguageTag::Python => crate::extractors::python::PythonExtractor::new(
            file_path.to_string(),
            content.to_string(),
        )
        .extract(tree),
        LanguageTag::JavaScript | LanguageTag::TypeScript => {
            crate::extractors::javascript::JavaScriptExtractor::new(
                language,
                file_path.to_string(),
                content.to_string(),
            )
            .extract(tree)
        }
        LanguageTag::Java => crate::extractors::java::JavaExtractor::new(
            file_path.to_string(),
            content.to_string(),
        )
        .extract(tree),
        LanguageTag::C | LanguageTag::Cpp => crate::extractors::cpp::CppExtractor::new(
            language,
            file_path.to_string(),
            content.to_string(),
        )
        .extract(tree),
        LanguageTag::Rust => crate::extractors::rust::RustExtractor::new(
            file_path.to_string(),
            content.to_string(),
        )
        .extract(tree),
        LanguageTag::Go => crate::extractors::go::GoExtractor::new(
            file_path.to_string(),
            content.to_string(),
        )
        .extract(tree),
        LanguageTag::Jac
        | LanguageTag::Ruby
        | LanguageTag::Php
        | LanguageTag::Kotlin
        | LanguageTag::Unknown => {
            return Err(anyhow!("No syntax-tree extractor for language: {}", language));
        }
    };

    Ok(extracted)
}

/// Syntax-tree strategy: parse, reject trees with syntax errors, walk
pub struct SyntaxTreeExtractor {
    language: LanguageTag,
}

impl SyntaxTreeExtractor {
    pub fn new(language: LanguageTag) -> Self {
        Self { language }
    }

    fn try_extract(&self, content: &str, file_path: &str) -> Result<Extracted> {
        let tree = parse_source(content, self.language, file_path)?;

        // No partial recovery: the first ERROR/MISSING node fails the file
        if let Some((line, column)) = BaseExtractor::first_syntax_error(&tree.root_node()) {
            return Err(anyhow!("syntax error at line {}, column {}", line, column));
        }

        extract_symbols(&tree, file_path, content, self.language)
    }
}

impl SymbolExtractor for SyntaxTreeExtractor {
    fn language(&self) -> LanguageTag {
        self.language
    }

    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::SyntaxTree
    }

    fn extract(&self, content: &str, file_path: &str) -> FileExtractionResult {
        match self.try_extract(content, file_path) {
            Ok(extracted) => {
                debug!(
                    "Extracted {} symbols from {} file: {}",
                    extracted.symbols.len(),
                    self.language,
                    file_path
                );
                FileExtractionResult::extracted(file_path, self.language, self.strategy(), extracted)
            }
            Err(e) => {
                debug!("Extraction failed for {}: {}", file_path, e);
                FileExtractionResult::failed(
                    file_path,
                    self.language,
                    Some(self.strategy()),
                    e.to_string(),
                )
            }
        }
    }
}

impl SymbolExtractor for HeuristicExtractor {
    fn language(&self) -> LanguageTag {
        HeuristicExtractor::language(self)
    }

    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Heuristic
    }

    fn extract(&self, content: &str, file_path: &str) -> FileExtractionResult {
        let extracted = HeuristicExtractor::extract(self, content);
        FileExtractionResult::extracted(file_path, self.language(), self.strategy(), extracted)
    }
}

/// Build the extractor for one language
///
/// Languages without a grammar always get the heuristic strategy;
/// `force_heuristic` selects it for grammar-backed languages too.
pub fn create_extractor(language: LanguageTag, force_heuristic: bool) -> Box<dyn SymbolExtractor> {
    if language.has_grammar() && !force_heuristic {
        Box::new(SyntaxTreeExtractor::new(language))
    } else {
        Box::new(HeuristicExtractor::new(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ExtractionOutcome, SymbolCategory};

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            create_extractor(LanguageTag::Python, false).strategy(),
            ExtractionStrategy::SyntaxTree
        );
        assert_eq!(
            create_extractor(LanguageTag::Python, true).strategy(),
            ExtractionStrategy::Heuristic
        );
        assert_eq!(
            create_extractor(LanguageTag::Jac, false).strategy(),
            ExtractionStrategy::Heuristic
        );
        assert_eq!(
            create_extractor(LanguageTag::Kotlin, false).language(),
            LanguageTag::Kotlin
        );
    }

    #[test]
    fn test_syntax_error_fails_without_partial_symbols() {
        let extractor = create_extractor(LanguageTag::Python, false);
        let result = extractor.extract("def ok():\n    pass\n\ndef broken(:\n", "bad.py");

        assert_eq!(result.outcome, ExtractionOutcome::Failed);
        assert!(result.symbols.is_empty());
        assert!(result.imports.is_empty());
        let error = result.error.unwrap();
        assert!(error.starts_with("syntax error at line "), "{}", error);
    }

    #[test]
    fn test_zero_byte_file_is_empty_and_clean() {
        for language in [LanguageTag::Python, LanguageTag::Rust, LanguageTag::Jac] {
            let result = create_extractor(language, false).extract("", "empty");
            assert_eq!(result.outcome, ExtractionOutcome::Extracted);
            assert!(result.error.is_none());
            assert!(result.symbols.is_empty());
            assert!(result.imports.is_empty());
        }
    }

    #[test]
    fn test_deeply_nested_source_extracts() {
        const DEPTH: usize = 20_000;
        let python = format!(
            "def outer():\n    return {}1{}\n",
            "(".repeat(DEPTH),
            ")".repeat(DEPTH)
        );
        let javascript = format!(
            "function outer() {{ return {}{}; }}\n",
            "[".repeat(DEPTH),
            "]".repeat(DEPTH)
        );

        for (language, path, code) in [
            (LanguageTag::Python, "nested.py", python),
            (LanguageTag::JavaScript, "nested.js", javascript),
        ] {
            let result = create_extractor(language, false).extract(&code, path);
            assert_eq!(result.outcome, ExtractionOutcome::Extracted, "{}", language);
            assert!(result.symbols.iter().any(|s| s.name == "outer"), "{}", language);
        }
    }

    #[test]
    fn test_every_grammar_language_routes() {
        let samples = [
            (LanguageTag::Python, "main.py", "def run(a, b):\n    pass\n"),
            (LanguageTag::JavaScript, "main.js", "function run(a, b) {}\n"),
            (LanguageTag::TypeScript, "main.ts", "function run(a: number, b: number) {}\n"),
            (LanguageTag::Java, "Main.java", "class Main { void run(int a, int b) {} }\n"),
            (LanguageTag::C, "main.c", "int run(int a, int b) { return a + b; }\n"),
            (LanguageTag::Cpp, "main.cpp", "int run(int a, int b) { return a + b; }\n"),
            (LanguageTag::Rust, "main.rs", "fn run(a: i32, b: i32) {}\n"),
            (LanguageTag::Go, "main.go", "package main\n\nfunc run(a, b int) {}\n"),
        ];

        for (language, path, code) in samples {
            let result = create_extractor(language, false).extract(code, path);
            assert_eq!(result.outcome, ExtractionOutcome::Extracted, "{}", language);
            let run = result
                .symbols
                .iter()
                .find(|s| s.name == "run")
                .unwrap_or_else(|| panic!("no run symbol for {}", language));
            assert_eq!(run.category, SymbolCategory::Function);
            assert_eq!(run.parameters, vec!["a", "b"], "{}", language);
        }
    }
}
