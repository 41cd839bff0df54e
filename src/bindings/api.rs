// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for repository scanning and symbol
// extraction. Anything that touches the filesystem releases the GIL.

use super::PyFileExtractionResult;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extractors::ExtractorManager;
use crate::language::{self, LanguageTag};
use crate::scanner::{self, Scanner};
use crate::utils::file_utils::content_hash;
use pyo3::exceptions::{PyFileNotFoundError, PyNotADirectoryError, PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::path::Path;

fn scan_error_to_py(error: ScanError) -> PyErr {
    match error {
        ScanError::RootNotFound { .. } => PyFileNotFoundError::new_err(error.to_string()),
        ScanError::RootNotDirectory { .. } => PyNotADirectoryError::new_err(error.to_string()),
        ScanError::RootUnreadable { .. } => PyOSError::new_err(error.to_string()),
        ScanError::InvalidConfig(_) => PyValueError::new_err(error.to_string()),
        ScanError::ThreadPool(_) => PyRuntimeError::new_err(error.to_string()),
    }
}

fn resolve_language(language: Option<&str>, file_path: &str) -> PyResult<LanguageTag> {
    match language {
        Some(name) => name
            .parse::<LanguageTag>()
            .map_err(|e| PyValueError::new_err(e.to_string())),
        None => Ok(language::detect_language(file_path)),
    }
}

/// Scan a repository and return its structural model
///
/// Args:
///     root (str): Repository root directory
///     config_json (str | None): JSON scan configuration; missing fields take
///         their defaults. GENIUS_MAX_FILES, GENIUS_MAX_DEPTH and
///         GENIUS_CONCURRENCY override the corresponding limits.
///
/// Returns:
///     str: The repository model as JSON (tree, language statistics, entry
///         points, README path and one extraction result per file)
///
/// Raises:
///     FileNotFoundError: If root does not exist
///     NotADirectoryError: If root is not a directory
///     OSError: If root cannot be listed
///     ValueError: If the configuration is invalid
#[pyfunction]
#[pyo3(signature = (root, config_json=None))]
pub fn scan_repository(py: Python<'_>, root: String, config_json: Option<String>) -> PyResult<String> {
    let config = match config_json {
        Some(json) => ScanConfig::from_json_str(&json),
        None => Ok(ScanConfig::default()),
    }
    .and_then(ScanConfig::with_env_overrides)
    .map_err(scan_error_to_py)?;

    // Release GIL for the walk and the parallel extraction
    let model = py
        .detach(move || Scanner::new(config)?.scan(&root))
        .map_err(scan_error_to_py)?;

    model
        .to_json()
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to serialize repository model: {}", e)))
}

/// Extract symbols and imports from in-memory source code
///
/// Args:
///     content (str): Source code
///     file_path (str): Path used in the result and for language detection
///     language (str | None): Language tag ("python", "jac", "go", ...);
///         detected from file_path when omitted
///     force_heuristic (bool): Use the regex strategy even when a grammar exists
///
/// Returns:
///     FileExtractionResult: Never raises for bad source; parse failures are
///         reported through `error` and outcome "failed"
///
/// Raises:
///     ValueError: If language is not a known tag
#[pyfunction]
#[pyo3(signature = (content, file_path, language=None, force_heuristic=false))]
pub fn extract_source(
    content: &str,
    file_path: &str,
    language: Option<&str>,
    force_heuristic: bool,
) -> PyResult<PyFileExtractionResult> {
    let language = resolve_language(language, file_path)?;
    let manager = if force_heuristic {
        ExtractorManager::new(&[language])
    } else {
        ExtractorManager::default()
    };

    let result = manager.extract_source(language, content, file_path);
    Ok(PyFileExtractionResult::from_result(result))
}

/// Extract symbols from multiple in-memory files in parallel
///
/// Releases the GIL and uses all available cores. Results keep the input
/// order; a file that fails to parse yields a "failed" result rather than
/// failing the batch.
///
/// Args:
///     files (list[tuple[str, str]]): (content, file_path) pairs; the language
///         is detected from each file_path
///
/// Returns:
///     list[FileExtractionResult]: One result per input, same order
#[pyfunction]
#[pyo3(signature = (files))]
pub fn extract_files_batch(py: Python<'_>, files: Vec<(String, String)>) -> Vec<PyFileExtractionResult> {
    use rayon::prelude::*;

    let results = py.detach(move || {
        let manager = ExtractorManager::default();
        files
            .par_iter()
            .map(|(content, file_path)| {
                let language = language::detect_language(file_path);
                manager.extract_source(language, content, file_path)
            })
            .collect::<Vec<_>>()
    });

    results
        .into_iter()
        .map(PyFileExtractionResult::from_result)
        .collect()
}

/// Detect a file's language from its name
///
/// Args:
///     file_path (str): File path or base name (e.g. "main.go", "app/walker.jac")
///
/// Returns:
///     str: Language tag, "unknown" for unrecognized extensions
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> String {
    language::detect_language(file_path).to_string()
}

/// Languages that have an extractor
///
/// Returns:
///     list[str]: Language tags, grammar-backed and heuristic alike
#[pyfunction]
pub fn supported_languages() -> Vec<String> {
    ExtractorManager::default()
        .supported_languages()
        .iter()
        .map(|language| language.to_string())
        .collect()
}

/// Read a README for the documentation service
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// Args:
///     path (str): README path, usually `readme_path` from the scan model
///
/// Returns:
///     str: File content
#[pyfunction]
#[pyo3(signature = (path))]
pub fn read_readme(py: Python<'_>, path: String) -> PyResult<String> {
    let content = py.detach(move || scanner::read_readme(Path::new(&path)))?;
    Ok(content)
}

/// Compute the BLAKE3 hex digest of a content string
///
/// Matches the `content_hash` carried by extraction results for the same bytes.
#[pyfunction]
pub fn hash_content(content: &str) -> String {
    content_hash(content.as_bytes())
}
