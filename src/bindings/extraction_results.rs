// PyFileExtractionResult - PyO3 wrapper for FileExtractionResult

use super::PySymbolRecord;
use crate::extractors::FileExtractionResult;
use pyo3::prelude::*;

/// Python-accessible per-file extraction result
///
/// `outcome` is one of "extracted", "failed", "not_applicable", "over_limit"
/// or "too_large". `error` is set only for "failed".
#[pyclass(name = "FileExtractionResult")]
pub struct PyFileExtractionResult {
    inner: FileExtractionResult,
}

impl PyFileExtractionResult {
    pub fn from_result(result: FileExtractionResult) -> Self {
        PyFileExtractionResult { inner: result }
    }
}

#[pymethods]
impl PyFileExtractionResult {
    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.clone()
    }

    #[getter]
    fn language(&self) -> String {
        self.inner.language.to_string()
    }

    #[getter]
    fn symbols(&self) -> Vec<PySymbolRecord> {
        self.inner
            .symbols
            .iter()
            .map(|s| PySymbolRecord::from_record(s.clone()))
            .collect()
    }

    #[getter]
    fn imports(&self) -> Vec<String> {
        self.inner.imports.clone()
    }

    #[getter]
    fn error(&self) -> Option<String> {
        self.inner.error.clone()
    }

    #[getter]
    fn outcome(&self) -> String {
        self.inner.outcome.to_string()
    }

    #[getter]
    fn strategy(&self) -> Option<String> {
        self.inner.strategy.map(|s| s.to_string())
    }

    #[getter]
    fn content_hash(&self) -> Option<String> {
        self.inner.content_hash.clone()
    }

    /// The result as a JSON object string
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "FileExtractionResult(file_path='{}', outcome='{}', symbols={})",
            self.inner.file_path,
            self.inner.outcome,
            self.inner.symbols.len()
        )
    }
}
