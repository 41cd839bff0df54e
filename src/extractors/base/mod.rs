// Base Extractor Types for genius_core
//
// - types.rs: data structures (SymbolRecord, FileExtractionResult, ...)
// - extractor.rs: BaseExtractor and doc comment lookup
// - tree_methods.rs: tree navigation, syntax error and static name helpers
// - creation_methods.rs: symbol construction
// - parser.rs: tree-sitter parser setup

pub mod creation_methods;
pub mod extractor;
pub mod parser;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use parser::parse_source;
pub use types::{
    Extracted, ExtractionOutcome, ExtractionStrategy, FileExtractionResult, SymbolCategory,
    SymbolOptions, SymbolRecord,
};
