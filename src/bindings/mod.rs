// PyO3 Bindings Module
//
// Python bindings for the scanner and the symbol extractors.
// Symbol and per-file result types are wrapped in PyO3-compatible classes;
// the repository model crosses the boundary as JSON.

mod api;
mod extraction_results;
mod symbol;

// Re-export for lib.rs
pub use api::{
    detect_language, extract_files_batch, extract_source, hash_content, read_readme,
    scan_repository, supported_languages,
};
pub use extraction_results::PyFileExtractionResult;
pub use symbol::PySymbolRecord;
