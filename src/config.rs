//! Scan configuration
//!
//! Every knob the scanner honors lives on [`ScanConfig`]. Configuration is always
//! passed explicitly into a scan; there is no process-wide state.

use crate::error::{ScanError, ScanResult};
use crate::language::{default_extension_map, normalize_extension, LanguageTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Environment variable overriding [`ScanConfig::max_files`]
pub const ENV_MAX_FILES: &str = "GENIUS_MAX_FILES";
/// Environment variable overriding [`ScanConfig::max_depth`]
pub const ENV_MAX_DEPTH: &str = "GENIUS_MAX_DEPTH";
/// Environment variable overriding [`ScanConfig::concurrency`]
pub const ENV_CONCURRENCY: &str = "GENIUS_CONCURRENCY";

/// Version control metadata, dependency caches, build output, virtual environments
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "venv",
    ".venv",
    "env",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "dist",
    "build",
    "target",
    ".idea",
    ".vscode",
];

/// Compiled bytecode, shared objects, archives, binary media
pub const DEFAULT_IGNORE_EXTENSIONS: &[&str] = &[
    ".pyc", ".pyo", ".pyd", ".so", ".o", ".a", ".dll", ".dylib", ".exe", ".class", ".jar",
    ".war", ".zip", ".tar", ".gz", ".tgz", ".bz2", ".xz", ".7z", ".rar", ".png", ".jpg",
    ".jpeg", ".gif", ".bmp", ".ico", ".webp", ".mp3", ".mp4", ".wav", ".mov", ".avi", ".pdf",
    ".woff", ".woff2", ".ttf", ".eot",
];

/// Conventional entry-point file names, highest priority first.
/// Matched case-insensitively.
pub const DEFAULT_ENTRY_POINT_NAMES: &[&str] = &[
    "main.py",
    "app.py",
    "__main__.py",
    "run.py",
    "server.py",
    "index.py",
    "start.py",
    "manage.py",
    "main.jac",
    "app.jac",
    "server.jac",
    "index.js",
    "main.js",
    "app.js",
    "server.js",
    "index.ts",
    "main.ts",
    "app.ts",
    "server.ts",
    "main.go",
    "main.rs",
    "lib.rs",
    "main.java",
    "application.java",
    "main.c",
    "main.cpp",
    "__init__.py",
];

/// README candidates in priority order. The scanner tries exact names in this
/// order first, then the same list case-insensitively.
pub const DEFAULT_README_NAMES: &[&str] = &[
    "README.md",
    "readme.md",
    "Readme.md",
    "README.rst",
    "README.txt",
    "README",
];

pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_MAX_FILES: usize = 50;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;
pub const DEFAULT_ENTRY_POINT_DEPTH: usize = 1;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names ignored wherever they appear in a path
    pub ignore_dirs: Vec<String>,
    /// File extensions (with leading dot) never included in the tree
    pub ignore_extensions: Vec<String>,
    /// Keep dot-files and dot-directories
    pub include_hidden: bool,
    /// Hidden names kept even when `include_hidden` is false (e.g. `.github`)
    pub hidden_allowlist: Vec<String>,
    /// Extra ignore patterns: `dir/`, globs such as `*.min.js`, or substrings
    pub ignore_patterns: Vec<String>,
    /// Also read ignore patterns from `.geniusignore` at the scan root
    pub use_ignore_file: bool,
    /// Extension → language table
    pub extension_languages: BTreeMap<String, LanguageTag>,
    /// Entry-point file names, highest priority first
    pub entry_point_names: Vec<String>,
    /// Deepest containing-directory depth searched for entry points (root = 0)
    pub entry_point_depth: usize,
    /// README candidates, highest priority first
    pub readme_names: Vec<String>,
    /// Deepest tree depth kept (root = 0)
    pub max_depth: usize,
    /// Ceiling on files dispatched to extraction
    pub max_files: usize,
    /// Files larger than this are kept in the tree but not extracted
    pub max_file_bytes: u64,
    /// Extraction worker threads; 0 uses the rayon default
    pub concurrency: usize,
    /// Languages forced onto the regex-heuristic strategy
    pub heuristic_languages: Vec<LanguageTag>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: to_strings(DEFAULT_IGNORE_DIRS),
            ignore_extensions: to_strings(DEFAULT_IGNORE_EXTENSIONS),
            include_hidden: false,
            hidden_allowlist: Vec::new(),
            ignore_patterns: Vec::new(),
            use_ignore_file: true,
            extension_languages: default_extension_map(),
            entry_point_names: to_strings(DEFAULT_ENTRY_POINT_NAMES),
            entry_point_depth: DEFAULT_ENTRY_POINT_DEPTH,
            readme_names: to_strings(DEFAULT_README_NAMES),
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            concurrency: 0,
            heuristic_languages: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> ScanResult<Self> {
        let config: ScanConfig = serde_json::from_str(json)
            .map_err(|e| ScanError::InvalidConfig(format!("malformed JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GENIUS_MAX_FILES`, `GENIUS_MAX_DEPTH` and `GENIUS_CONCURRENCY`
    pub fn with_env_overrides(self) -> ScanResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> ScanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str, raw: String| -> ScanResult<usize> {
            raw.trim().parse::<usize>().map_err(|_| {
                ScanError::InvalidConfig(format!("{} must be a non-negative integer, got '{}'", key, raw))
            })
        };

        if let Some(raw) = lookup(ENV_MAX_FILES) {
            self.max_files = parse(ENV_MAX_FILES, raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            self.max_depth = parse(ENV_MAX_DEPTH, raw)?;
        }
        if let Some(raw) = lookup(ENV_CONCURRENCY) {
            self.concurrency = parse(ENV_CONCURRENCY, raw)?;
        }

        debug!(
            "Scan limits: max_files={}, max_depth={}, concurrency={}",
            self.max_files, self.max_depth, self.concurrency
        );
        Ok(self)
    }

    /// Reject entries that can never match anything
    pub fn validate(&self) -> ScanResult<()> {
        if let Some(dir) = self.ignore_dirs.iter().find(|d| d.trim().is_empty() || d.contains('/')) {
            return Err(ScanError::InvalidConfig(format!(
                "ignore_dirs entries must be bare directory names, got '{}'",
                dir
            )));
        }
        if let Some(ext) = self.ignore_extensions.iter().find(|e| e.trim_start_matches('.').is_empty()) {
            return Err(ScanError::InvalidConfig(format!("empty ignore extension '{}'", ext)));
        }
        if let Some(ext) = self
            .extension_languages
            .keys()
            .find(|e| e.trim_start_matches('.').is_empty())
        {
            return Err(ScanError::InvalidConfig(format!("empty language extension '{}'", ext)));
        }
        // `.PY`, `py` and `.py` all resolve the same suffix
        let mut seen = HashSet::new();
        if let Some(ext) = self
            .extension_languages
            .keys()
            .find(|e| !seen.insert(normalize_extension(e)))
        {
            return Err(ScanError::InvalidConfig(format!(
                "language extension '{}' is configured more than once",
                ext
            )));
        }
        if self.entry_point_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ScanError::InvalidConfig("empty entry point name".to_string()));
        }
        if self.readme_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ScanError::InvalidConfig("empty README name".to_string()));
        }
        Ok(())
    }
}
