// Genius Core - repository scanning and symbol extraction
//
// Builds the structural model of a repository (filtered tree, language
// statistics, entry points, README) and extracts function/type records from
// its source files. Used from Rust directly, or from the Python web service
// through the `python` feature.

pub mod config;
pub mod error;
pub mod extractors;
pub mod language;
pub mod scanner;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
mod bindings;

pub use config::ScanConfig;
pub use error::{ScanError, ScanResult};
pub use extractors::{
    create_extractor, ExtractionOutcome, ExtractionStrategy, ExtractorManager, FileExtractionResult,
    SymbolCategory, SymbolExtractor, SymbolRecord,
};
pub use language::{detect_language, LanguageTag};
pub use scanner::{FileNode, InheritanceEdge, NodeKind, RepositoryModel, Scanner};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Genius Core Python module
///
/// Scans repositories and extracts symbols for Python, Jac, JavaScript,
/// TypeScript, Java, C, C++, Rust, Go, Ruby, PHP and Kotlin.
#[cfg(feature = "python")]
#[pymodule]
fn genius_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::scan_repository, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_source, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_files_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::read_readme, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::hash_content, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PySymbolRecord>()?;
    m.add_class::<bindings::PyFileExtractionResult>()?;

    Ok(())
}
