//! ExtractorManager - Public API for per-file symbol extraction
//!
//! Holds one extractor per known language and isolates callers from extractor
//! failures: I/O errors and panics both become `failed` results.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::extractors::base::FileExtractionResult;
use crate::extractors::factory::create_extractor;
use crate::extractors::SymbolExtractor;
use crate::language::LanguageTag;
use crate::utils::file_utils::{content_hash, read_lossy};

/// Manager for all language extractors
pub struct ExtractorManager {
    extractors: HashMap<LanguageTag, Box<dyn SymbolExtractor>>,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl ExtractorManager {
    /// Build the fixed tag → extractor mapping
    ///
    /// Languages in `heuristic_languages` use the regex strategy even when a
    /// grammar is available.
    pub fn new(heuristic_languages: &[LanguageTag]) -> Self {
        let extractors = LanguageTag::ALL
            .iter()
            .map(|&language| {
                let force_heuristic = heuristic_languages.contains(&language);
                (language, create_extractor(language, force_heuristic))
            })
            .collect();

        Self { extractors }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(&config.heuristic_languages)
    }

    /// Languages with an extractor, in declaration order
    pub fn supported_languages(&self) -> Vec<LanguageTag> {
        LanguageTag::ALL
            .iter()
            .copied()
            .filter(|language| self.extractors.contains_key(language))
            .collect()
    }

    pub fn extractor_for(&self, language: LanguageTag) -> Option<&dyn SymbolExtractor> {
        self.extractors.get(&language).map(|e| e.as_ref())
    }

    /// Extract symbols from in-memory content
    ///
    /// Files of unknown language are `not_applicable`.
    pub fn extract_source(
        &self,
        language: LanguageTag,
        content: &str,
        file_path: &str,
    ) -> FileExtractionResult {
        let Some(extractor) = self.extractor_for(language) else {
            return FileExtractionResult::not_applicable(file_path, language);
        };

        match catch_unwind(AssertUnwindSafe(|| extractor.extract(content, file_path))) {
            Ok(result) => result,
            Err(_) => {
                warn!("{} extractor panicked on {}", language, file_path);
                FileExtractionResult::failed(
                    file_path,
                    language,
                    Some(extractor.strategy()),
                    format!("{} extractor panicked", language),
                )
            }
        }
    }

    /// Read a file (lossy UTF-8) and extract its symbols
    ///
    /// The result carries the BLAKE3 digest of the bytes read.
    pub fn extract_file(&self, path: &Path, language: LanguageTag) -> FileExtractionResult {
        let file_path = path.to_string_lossy();
        let Some(extractor) = self.extractor_for(language) else {
            return FileExtractionResult::not_applicable(&file_path, language);
        };

        let (content, bytes) = match read_lossy(path) {
            Ok(read) => read,
            Err(e) => {
                debug!("Failed to read {}: {:#}", file_path, e);
                return FileExtractionResult::failed(
                    &file_path,
                    language,
                    Some(extractor.strategy()),
                    format!("{:#}", e),
                );
            }
        };

        self.extract_source(language, &content, &file_path)
            .with_content_hash(content_hash(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ExtractionOutcome, ExtractionStrategy};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_every_language_has_an_extractor() {
        let manager = ExtractorManager::default();
        assert_eq!(manager.supported_languages(), LanguageTag::ALL.to_vec());
        assert!(manager.extractor_for(LanguageTag::Unknown).is_none());
    }

    #[test]
    fn test_heuristic_override() {
        let manager = ExtractorManager::new(&[LanguageTag::Rust]);
        assert_eq!(
            manager.extractor_for(LanguageTag::Rust).unwrap().strategy(),
            ExtractionStrategy::Heuristic
        );
        assert_eq!(
            manager.extractor_for(LanguageTag::Go).unwrap().strategy(),
            ExtractionStrategy::SyntaxTree
        );
    }

    #[test]
    fn test_extract_file_hashes_and_decodes_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.py");
        let mut bytes = b"def run(a, b):\n    return '".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"'\n");
        fs::write(&path, &bytes).unwrap();

        let manager = ExtractorManager::default();
        let result = manager.extract_file(&path, LanguageTag::Python);

        assert_eq!(result.outcome, ExtractionOutcome::Extracted);
        assert_eq!(result.symbols[0].name, "run");
        assert_eq!(result.content_hash, Some(content_hash(&bytes)));
    }

    #[test]
    fn test_missing_file_becomes_failed_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.rs");

        let result = ExtractorManager::default().extract_file(&path, LanguageTag::Rust);
        assert!(result.is_failed());
        assert_eq!(result.outcome, ExtractionOutcome::Failed);
        assert!(result.content_hash.is_none());
    }

    #[test]
    fn test_unknown_language_is_not_applicable() {
        let result =
            ExtractorManager::default().extract_source(LanguageTag::Unknown, "data", "notes.txt");
        assert_eq!(result.outcome, ExtractionOutcome::NotApplicable);
        assert!(result.error.is_none());
    }
}
