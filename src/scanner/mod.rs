//! Repository scanner
//!
//! `Scanner::scan` runs the whole pipeline for one root:
//! tree builder (+ classifier) → enumerator → per-file extraction on a rayon
//! pool → aggregator.

pub mod aggregate;
pub mod classifier;
pub mod enumerate;
pub mod tree;

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::extractors::{ExtractorManager, FileExtractionResult};
use crate::language::LanguageTag;
use crate::utils::ignore::load_ignore_file;

pub use aggregate::{aggregate, InheritanceEdge, RepositoryModel};
pub use classifier::{Classification, IgnoreReason, PathClassifier};
pub use enumerate::{find_entry_points, find_readme, flatten, read_readme};
pub use tree::{build_tree, FileNode, NodeKind};

/// One-shot, full-tree scanner
pub struct Scanner {
    config: ScanConfig,
    manager: ExtractorManager,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        let manager = ExtractorManager::from_config(&config);
        Ok(Self { config, manager })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` into a repository model
    ///
    /// Only root-level problems abort the scan; everything else is recorded on
    /// the affected file or directory.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult<RepositoryModel> {
        let root = root.as_ref();
        let started = Instant::now();
        info!("Scanning repository {}", root.display());

        tree::check_root(root)?;
        let extra_patterns = if self.config.use_ignore_file {
            load_ignore_file(root).unwrap_or_else(|e| {
                warn!("Ignoring unreadable ignore file: {:#}", e);
                Vec::new()
            })
        } else {
            Vec::new()
        };
        let classifier = PathClassifier::new(&self.config, &extra_patterns);
        let tree = build_tree(root, &classifier, self.config.max_depth)?;

        let entry_points = find_entry_points(
            &tree,
            &self.config.entry_point_names,
            self.config.entry_point_depth,
        );
        let readme_path = find_readme(&tree, &self.config.readme_names);

        let pool = self.thread_pool()?;
        let model = pool.install(|| {
            let per_file_results = self.extract_all(&tree);
            aggregate(root, tree, per_file_results, entry_points, readme_path)
        });

        info!(
            "Scanned {} files ({} lines, {} failed) in {}ms",
            model.total_files,
            model.total_lines,
            model.failed_files().len(),
            started.elapsed().as_millis()
        );
        Ok(model)
    }

    fn thread_pool(&self) -> ScanResult<rayon::ThreadPool> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if self.config.concurrency > 0 {
            builder = builder.num_threads(self.config.concurrency);
        }
        builder
            .build()
            .map_err(|e| ScanError::ThreadPool(e.to_string()))
    }

    /// Select files for extraction in tree order and run them in parallel
    ///
    /// Unknown-language files are `not_applicable`, oversized files
    /// `too_large`, and files past `max_files` `over_limit`.
    fn extract_all(&self, tree: &FileNode) -> BTreeMap<String, FileExtractionResult> {
        let mut results = BTreeMap::new();
        let mut dispatched: Vec<(&str, LanguageTag)> = Vec::new();

        for file in tree.files() {
            let language = file.language();
            let result = if self.manager.extractor_for(language).is_none() {
                FileExtractionResult::not_applicable(&file.path, language)
            } else if file.size.unwrap_or(0) > self.config.max_file_bytes {
                debug!("Skipping large file {}", file.path);
                FileExtractionResult::too_large(&file.path, language)
            } else if dispatched.len() >= self.config.max_files {
                FileExtractionResult::over_limit(&file.path, language)
            } else {
                dispatched.push((file.path.as_str(), language));
                continue;
            };
            results.insert(file.path.clone(), result);
        }

        if dispatched.len() == self.config.max_files {
            debug!("File ceiling of {} reached", self.config.max_files);
        }

        let extracted: Vec<(String, FileExtractionResult)> = dispatched
            .par_iter()
            .map(|(path, language)| {
                let result = self.manager.extract_file(Path::new(path), *language);
                (path.to_string(), result)
            })
            .collect();
        results.extend(extracted);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ExtractionOutcome;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_ceiling_in_tree_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["a.py", "b.py", "c.py"] {
            fs::write(root.join(name), "def f():\n    pass\n").unwrap();
        }
        fs::write(root.join("LICENSE"), "MIT\n").unwrap();

        let config = ScanConfig {
            max_files: 2,
            ..ScanConfig::default()
        };
        let model = Scanner::new(config).unwrap().scan(root).unwrap();

        let outcome = |name: &str| {
            let path = root.join(name).to_string_lossy().into_owned();
            model.per_file_results[&path].outcome
        };
        // Files without an extractor do not count toward the ceiling
        assert_eq!(outcome("LICENSE"), ExtractionOutcome::NotApplicable);
        assert_eq!(outcome("a.py"), ExtractionOutcome::Extracted);
        assert_eq!(outcome("b.py"), ExtractionOutcome::Extracted);
        assert_eq!(outcome("c.py"), ExtractionOutcome::OverLimit);
        assert_eq!(model.total_files, 4);
    }

    #[test]
    fn test_large_files_are_not_extracted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("big.py"), "x = 1\n".repeat(100)).unwrap();
        fs::write(root.join("small.py"), "x = 1\n").unwrap();

        let config = ScanConfig {
            max_file_bytes: 64,
            ..ScanConfig::default()
        };
        let model = Scanner::new(config).unwrap().scan(root).unwrap();

        let big = root.join("big.py").to_string_lossy().into_owned();
        assert_eq!(model.per_file_results[&big].outcome, ExtractionOutcome::TooLarge);
        // Still counted
        assert_eq!(model.language_lines[&LanguageTag::Python], 101);
    }

    #[test]
    fn test_ignore_file_is_honored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("generated/api.py"), "").unwrap();
        fs::write(root.join("bundle.min.js"), "").unwrap();
        fs::write(root.join("app.js"), "").unwrap();
        fs::write(root.join(".geniusignore"), "# build output\ngenerated/\n*.min.js\n").unwrap();

        let model = Scanner::new(ScanConfig::default()).unwrap().scan(root).unwrap();
        let names: Vec<&str> = model.tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["app.js"]);

        let config = ScanConfig {
            use_ignore_file: false,
            ..ScanConfig::default()
        };
        let model = Scanner::new(config).unwrap().scan(root).unwrap();
        assert_eq!(model.total_files, 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScanConfig {
            readme_names: vec![" ".to_string()],
            ..ScanConfig::default()
        };
        assert!(matches!(Scanner::new(config), Err(ScanError::InvalidConfig(_))));
    }
}
