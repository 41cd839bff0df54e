//! Language extractors module
//!
//! Turns the text of one source file into a normalized `FileExtractionResult`.
//! Grammar-backed languages are walked with tree-sitter; the rest go through
//! the regex heuristics.
//!
//! # Architecture
//!
//! - `base` - shared types, `BaseExtractor` and tree helpers
//! - `factory` - tag → extractor routing and the two strategies
//! - `manager` - `ExtractorManager` public API (file reads, panic isolation)
//! - `heuristic` - regex pattern tables
//! - Language modules (python, javascript, java, cpp, rust, go)

pub mod base;
pub mod factory;
pub mod heuristic;
pub mod manager;

// Syntax-tree extractors
pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

use crate::language::LanguageTag;

// Re-export the public API
pub use base::{
    ExtractionOutcome, ExtractionStrategy, FileExtractionResult, SymbolCategory, SymbolRecord,
};
pub use factory::create_extractor;
pub use manager::ExtractorManager;

/// One extraction strategy bound to one language
///
/// `extract` never panics or errors past this boundary: failures are reported
/// through `FileExtractionResult::error`.
pub trait SymbolExtractor: Send + Sync {
    fn language(&self) -> LanguageTag;
    fn strategy(&self) -> ExtractionStrategy;
    fn extract(&self, content: &str, file_path: &str) -> FileExtractionResult;
}
