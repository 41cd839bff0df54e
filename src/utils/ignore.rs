//! Custom ignore patterns (`.geniusignore` support)
//!
//! Patterns come from [`ScanConfig::ignore_patterns`](crate::config::ScanConfig)
//! and, optionally, from a `.geniusignore` file at the repository root. They are
//! matched against paths relative to the root.
//!
use anyhow::Result;
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const IGNORE_FILE_NAME: &str = ".geniusignore";

/// Load custom ignore patterns from `.geniusignore` in the repository root
///
/// Returns a vector of patterns to ignore. Empty lines and comments (lines starting with #) are skipped.
///
/// # Examples
///
/// ```text
/// # .geniusignore file content
/// generated/
/// *.min.js
/// temp_files/
/// ```
pub fn load_ignore_file(root: &Path) -> Result<Vec<String>> {
    let ignore_file = root.join(IGNORE_FILE_NAME);

    if !ignore_file.is_file() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", IGNORE_FILE_NAME, e))?;

    let patterns: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();

    if !patterns.is_empty() {
        debug!(
            "Loaded {} custom ignore patterns from {}",
            patterns.len(),
            IGNORE_FILE_NAME
        );
    }

    Ok(patterns)
}

/// Compiled set of custom ignore patterns
///
/// Supports three pattern types:
/// - Directory patterns (ending with /): match a whole path component, plus all contents
/// - Glob patterns (containing `*`, `?` or `[`): matched against the relative path and the base name
/// - Anything else: substring match anywhere in the relative path
///
/// Word boundary rule: "packages/" matches "packages" and "src/packages" but NOT
/// "my-packages" or "subpackages".
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    directories: Vec<String>,
    globs: Vec<Pattern>,
    substrings: Vec<String>,
}

impl IgnorePatterns {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut compiled = IgnorePatterns::default();

        for raw in patterns {
            let pattern = raw.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }

            if let Some(dir_name) = pattern.strip_suffix('/') {
                compiled.directories.push(dir_name.trim_start_matches('/').to_string());
            } else if pattern.contains(['*', '?', '[']) {
                match Pattern::new(pattern) {
                    Ok(glob) => compiled.globs.push(glob),
                    Err(e) => warn!("Skipping invalid ignore pattern '{}': {}", pattern, e),
                }
            } else {
                compiled.substrings.push(pattern.to_string());
            }
        }

        compiled
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.globs.is_empty() && self.substrings.is_empty()
    }

    /// Check a relative Unix-style path against every pattern
    pub fn is_ignored(&self, relative: &str) -> bool {
        if self.is_empty() || relative.is_empty() {
            return false;
        }

        // A directory pattern may itself contain separators ("src/generated/")
        for dir in &self.directories {
            if relative == dir
                || relative.starts_with(&format!("{}/", dir))
                || relative.ends_with(&format!("/{}", dir))
                || relative.contains(&format!("/{}/", dir))
            {
                return true;
            }
        }

        let base_name = relative.rsplit('/').next().unwrap_or(relative);
        if self
            .globs
            .iter()
            .any(|glob| glob.matches(relative) || glob.matches(base_name))
        {
            return true;
        }

        self.substrings.iter().any(|s| relative.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_ignore_file() {
        let temp_dir = TempDir::new().unwrap();
        let patterns = load_ignore_file(temp_dir.path()).unwrap();
        assert!(
            patterns.is_empty(),
            "Should return empty vector if .geniusignore doesn't exist"
        );
    }

    #[test]
    fn test_load_ignore_file_with_patterns() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(IGNORE_FILE_NAME),
            "# Comment line\ngenerated/\n*.min.js\n\ntemp_files/\n# Another comment\n",
        )
        .unwrap();

        let patterns = load_ignore_file(temp_dir.path()).unwrap();
        assert_eq!(
            patterns,
            vec!["generated/", "*.min.js", "temp_files/"],
            "Should skip comments and empty lines"
        );
    }

    #[test]
    fn test_directory_pattern() {
        let patterns = IgnorePatterns::new(&["generated/"]);
        assert!(patterns.is_ignored("generated"));
        assert!(patterns.is_ignored("generated/schema.py"));
        assert!(patterns.is_ignored("src/generated"));
        assert!(patterns.is_ignored("src/generated/schema.py"));
    }

    #[test]
    fn test_directory_pattern_word_boundary() {
        let patterns = IgnorePatterns::new(&["packages/"]);
        assert!(!patterns.is_ignored("my-packages"));
        assert!(!patterns.is_ignored("src/my-packages/a.js"));
        assert!(!patterns.is_ignored("subpackages"));
        assert!(!patterns.is_ignored("packages-old"));
    }

    #[test]
    fn test_glob_patterns() {
        let patterns = IgnorePatterns::new(&["*.min.js", "docs/**/*.png"]);
        assert!(patterns.is_ignored("app.min.js"));
        assert!(patterns.is_ignored("static/vendor/app.min.js"));
        assert!(patterns.is_ignored("docs/img/logo.png"));
        assert!(!patterns.is_ignored("static/app.js"));
    }

    #[test]
    fn test_substring_pattern() {
        let patterns = IgnorePatterns::new(&["temp"]);
        assert!(patterns.is_ignored("temp_files/data.txt"));
        assert!(!patterns.is_ignored("src/normal.py"));
    }

    #[test]
    fn test_empty_set_ignores_nothing() {
        let patterns = IgnorePatterns::new::<&str>(&[]);
        assert!(patterns.is_empty());
        assert!(!patterns.is_ignored("anything/at/all.py"));
    }
}
