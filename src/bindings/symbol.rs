// PySymbolRecord - PyO3 wrapper for SymbolRecord
//
// Read-only view of one extracted function or type.

use crate::extractors::SymbolRecord;
use pyo3::prelude::*;

/// Python-accessible symbol record
///
/// `category` is "function" or "type"; `construct` is the language-specific
/// label ("method", "struct", "walker", ...). All fields are read-only.
#[pyclass(name = "SymbolRecord")]
pub struct PySymbolRecord {
    inner: SymbolRecord,
}

impl PySymbolRecord {
    pub fn from_record(record: SymbolRecord) -> Self {
        PySymbolRecord { inner: record }
    }
}

#[pymethods]
impl PySymbolRecord {
    #[getter]
    fn category(&self) -> String {
        self.inner.category.to_string()
    }

    #[getter]
    fn construct(&self) -> String {
        self.inner.construct.clone()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// 1-based; 0 for heuristic extraction
    #[getter]
    fn source_line(&self) -> u32 {
        self.inner.source_line
    }

    #[getter]
    fn parameters(&self) -> Vec<String> {
        self.inner.parameters.clone()
    }

    #[getter]
    fn members(&self) -> Vec<String> {
        self.inner.members.clone()
    }

    #[getter]
    fn supertypes(&self) -> Vec<String> {
        self.inner.supertypes.clone()
    }

    #[getter]
    fn docstring(&self) -> String {
        self.inner.docstring.clone()
    }

    #[getter]
    fn is_async(&self) -> bool {
        self.inner.is_async
    }

    #[getter]
    fn parent(&self) -> Option<String> {
        self.inner.parent.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "SymbolRecord(name='{}', construct='{}', line={})",
            self.inner.name, self.inner.construct, self.inner.source_line
        )
    }
}
