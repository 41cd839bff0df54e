//! Repository model assembly and statistics

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::extractors::base::{FileExtractionResult, SymbolRecord};
use crate::language::LanguageTag;
use crate::scanner::tree::FileNode;
use crate::utils::file_utils::count_lines;

/// Structural model of one scanned repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryModel {
    pub root: String,
    pub tree: FileNode,
    pub language_counts: BTreeMap<LanguageTag, usize>,
    pub language_lines: BTreeMap<LanguageTag, usize>,
    pub total_files: usize,
    pub total_lines: usize,
    pub entry_points: Vec<String>,
    pub readme_path: Option<String>,
    /// Exactly one result per file node, keyed by full path
    pub per_file_results: BTreeMap<String, FileExtractionResult>,
}

/// A `type` record naming one of its declared supertypes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceEdge {
    pub file_path: String,
    pub child: String,
    pub parent: String,
}

/// Combine the tree and per-file results into the repository model
///
/// Counts come from a full walk of the tree; line totals come from an
/// independent newline count of every file. Files without a result get a
/// `not_applicable` one, and results for paths outside the tree are dropped.
pub fn aggregate(
    root: &Path,
    tree: FileNode,
    mut per_file_results: BTreeMap<String, FileExtractionResult>,
    entry_points: Vec<String>,
    readme_path: Option<String>,
) -> RepositoryModel {
    let files = tree.files();

    let mut language_counts: BTreeMap<LanguageTag, usize> = BTreeMap::new();
    for file in &files {
        *language_counts.entry(file.language()).or_default() += 1;
    }

    let line_counts: Vec<(LanguageTag, usize)> = files
        .par_iter()
        .map(|file| match count_lines(Path::new(&file.path)) {
            Ok(lines) => (file.language(), lines),
            Err(e) => {
                debug!("Line count skipped: {:#}", e);
                (file.language(), 0)
            }
        })
        .collect();
    let mut language_lines: BTreeMap<LanguageTag, usize> = BTreeMap::new();
    for (language, lines) in line_counts {
        *language_lines.entry(language).or_default() += lines;
    }

    let mut results = BTreeMap::new();
    for file in &files {
        let result = per_file_results
            .remove(&file.path)
            .unwrap_or_else(|| FileExtractionResult::not_applicable(&file.path, file.language()));
        results.insert(file.path.clone(), result);
    }
    for orphan in per_file_results.keys() {
        warn!("Dropping extraction result for path outside the tree: {}", orphan);
    }

    let total_files = files.len();
    let total_lines = language_lines.values().sum();

    RepositoryModel {
        root: root.to_string_lossy().into_owned(),
        tree,
        language_counts,
        language_lines,
        total_files,
        total_lines,
        entry_points,
        readme_path,
        per_file_results: results,
    }
}

impl RepositoryModel {
    /// Results that carry an error
    pub fn failed_files(&self) -> Vec<&FileExtractionResult> {
        self.per_file_results
            .values()
            .filter(|result| result.is_failed())
            .collect()
    }

    /// Every extracted symbol, in path order
    pub fn symbols(&self) -> Vec<&SymbolRecord> {
        self.per_file_results
            .values()
            .flat_map(|result| result.symbols.iter())
            .collect()
    }

    /// One edge per (type, declared supertype) pair
    pub fn inheritance_edges(&self) -> Vec<InheritanceEdge> {
        self.per_file_results
            .values()
            .flat_map(|result| {
                result
                    .symbols
                    .iter()
                    .filter(|symbol| symbol.is_type())
                    .flat_map(move |symbol| {
                        symbol.supertypes.iter().map(move |parent| InheritanceEdge {
                            file_path: result.file_path.clone(),
                            child: symbol.name.clone(),
                            parent: parent.clone(),
                        })
                    })
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::extractors::base::{ExtractionOutcome, ExtractionStrategy, Extracted, SymbolCategory};
    use crate::scanner::classifier::PathClassifier;
    use crate::scanner::tree::build_tree;
    use std::fs;
    use tempfile::TempDir;

    fn worker_symbol() -> SymbolRecord {
        SymbolRecord {
            category: SymbolCategory::Type,
            construct: "class".to_string(),
            name: "Worker".to_string(),
            source_line: 1,
            parameters: Vec::new(),
            members: vec!["start".to_string()],
            supertypes: vec!["BaseWorker".to_string(), "Runnable".to_string()],
            docstring: String::new(),
            is_async: false,
            parent: None,
        }
    }

    #[test]
    fn test_counts_lines_and_missing_results() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.py"), "class Worker(BaseWorker, Runnable):\n    pass\n").unwrap();
        fs::write(root.join("b.py"), "x = 1\n").unwrap();
        fs::write(root.join("notes.txt"), "one\ntwo\nthree\n").unwrap();

        let tree = build_tree(root, &PathClassifier::new(&ScanConfig::default(), &[]), 10).unwrap();
        let a_path = root.join("a.py").to_string_lossy().into_owned();

        let mut results = BTreeMap::new();
        results.insert(
            a_path.clone(),
            FileExtractionResult::extracted(
                &a_path,
                LanguageTag::Python,
                ExtractionStrategy::SyntaxTree,
                Extracted {
                    symbols: vec![worker_symbol()],
                    imports: Vec::new(),
                },
            ),
        );
        results.insert(
            "/elsewhere/ghost.py".to_string(),
            FileExtractionResult::not_applicable("/elsewhere/ghost.py", LanguageTag::Python),
        );

        let model = aggregate(root, tree, results, Vec::new(), None);

        assert_eq!(model.total_files, 3);
        assert_eq!(model.language_counts[&LanguageTag::Python], 2);
        assert_eq!(model.language_counts[&LanguageTag::Unknown], 1);
        assert_eq!(model.language_counts.values().sum::<usize>(), model.total_files);
        assert_eq!(model.language_lines[&LanguageTag::Python], 3);
        assert_eq!(model.total_lines, 6);

        assert_eq!(model.per_file_results.len(), 3);
        assert!(!model.per_file_results.contains_key("/elsewhere/ghost.py"));
        let notes = root.join("notes.txt").to_string_lossy().into_owned();
        assert_eq!(
            model.per_file_results[&notes].outcome,
            ExtractionOutcome::NotApplicable
        );

        assert_eq!(model.symbols().len(), 1);
        assert!(model.failed_files().is_empty());
        let edges = model.inheritance_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].child, "Worker");
        assert_eq!(edges[0].parent, "BaseWorker");
        assert_eq!(edges[1].parent, "Runnable");
    }

    #[test]
    fn test_json_uses_lowercase_tags() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("main.go"), "package main\n").unwrap();

        let tree = build_tree(root, &PathClassifier::new(&ScanConfig::default(), &[]), 10).unwrap();
        let model = aggregate(root, tree, BTreeMap::new(), Vec::new(), None);
        let json = model.to_json().unwrap();

        assert!(json.contains("\"go\": 1"));
        assert!(json.contains("\"kind\": \"directory\""));
        let parsed: RepositoryModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }
}
