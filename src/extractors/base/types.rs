// Base Extractor Types for genius_core
//
// Data structures produced by every extraction strategy: the normalized symbol
// record and the per-file extraction outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::LanguageTag;

/// Coarse symbol category shared by all languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Function,
    /// Classes, structs, interfaces, traits, enums, and language-specific
    /// constructs such as Jac walkers and nodes
    Type,
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolCategory::Function => write!(f, "function"),
            SymbolCategory::Type => write!(f, "type"),
        }
    }
}

/// A function or type declaration extracted from one source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolRecord {
    pub category: SymbolCategory,
    /// Language-specific construct label (`method`, `struct`, `walker`, ...)
    pub construct: String,
    /// Identifier as it appears in code, not unique within a file
    pub name: String,
    /// 1-based line number, 0 when unknown (heuristic extraction)
    pub source_line: u32,
    pub parameters: Vec<String>,
    /// Method names from the immediate body; types only
    pub members: Vec<String>,
    /// Declared base identifiers, static names only
    pub supertypes: Vec<String>,
    /// Leading documentation, empty when none
    pub docstring: String,
    pub is_async: bool,
    /// Enclosing type name for methods
    pub parent: Option<String>,
}

impl SymbolRecord {
    pub fn is_type(&self) -> bool {
        self.category == SymbolCategory::Type
    }
}

/// Optional fields for creating symbols - mirrors create_symbol options
#[derive(Debug, Clone, Default)]
pub struct SymbolOptions {
    pub parameters: Vec<String>,
    pub members: Vec<String>,
    pub supertypes: Vec<String>,
    pub docstring: Option<String>,
    pub is_async: bool,
    pub parent: Option<String>,
}

/// Which extraction strategy produced a result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    SyntaxTree,
    Heuristic,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::SyntaxTree => write!(f, "syntax_tree"),
            ExtractionStrategy::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Why a file's result looks the way it does
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// Dispatched and extracted (possibly with zero symbols)
    Extracted,
    /// Dispatched but unreadable or unparsable; `error` is set
    Failed,
    /// No extractor for the file's language
    NotApplicable,
    /// Past the file ceiling, kept in the tree only
    OverLimit,
    /// Larger than the configured byte limit
    TooLarge,
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::Extracted => write!(f, "extracted"),
            ExtractionOutcome::Failed => write!(f, "failed"),
            ExtractionOutcome::NotApplicable => write!(f, "not_applicable"),
            ExtractionOutcome::OverLimit => write!(f, "over_limit"),
            ExtractionOutcome::TooLarge => write!(f, "too_large"),
        }
    }
}

/// Symbols and imports found by one strategy, before they are wrapped into a result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub symbols: Vec<SymbolRecord>,
    pub imports: Vec<String>,
}

/// Per-file extraction outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileExtractionResult {
    pub file_path: String,
    pub language: LanguageTag,
    pub symbols: Vec<SymbolRecord>,
    /// Raw, unresolved module identifiers
    pub imports: Vec<String>,
    pub error: Option<String>,
    pub outcome: ExtractionOutcome,
    pub strategy: Option<ExtractionStrategy>,
    /// BLAKE3 hex digest of the bytes that were read
    pub content_hash: Option<String>,
}

impl FileExtractionResult {
    fn empty(file_path: &str, language: LanguageTag, outcome: ExtractionOutcome) -> Self {
        Self {
            file_path: file_path.to_string(),
            language,
            symbols: Vec::new(),
            imports: Vec::new(),
            error: None,
            outcome,
            strategy: None,
            content_hash: None,
        }
    }

    pub fn extracted(
        file_path: &str,
        language: LanguageTag,
        strategy: ExtractionStrategy,
        extracted: Extracted,
    ) -> Self {
        Self {
            symbols: extracted.symbols,
            imports: extracted.imports,
            strategy: Some(strategy),
            ..Self::empty(file_path, language, ExtractionOutcome::Extracted)
        }
    }

    /// Symbols and imports stay empty on failure
    pub fn failed(
        file_path: &str,
        language: LanguageTag,
        strategy: Option<ExtractionStrategy>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: Some(error.into()),
            strategy,
            ..Self::empty(file_path, language, ExtractionOutcome::Failed)
        }
    }

    pub fn not_applicable(file_path: &str, language: LanguageTag) -> Self {
        Self::empty(file_path, language, ExtractionOutcome::NotApplicable)
    }

    pub fn over_limit(file_path: &str, language: LanguageTag) -> Self {
        Self::empty(file_path, language, ExtractionOutcome::OverLimit)
    }

    pub fn too_large(file_path: &str, language: LanguageTag) -> Self {
        Self::empty(file_path, language, ExtractionOutcome::TooLarge)
    }

    pub fn with_content_hash(mut self, hash: String) -> Self {
        self.content_hash = Some(hash);
        self
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
