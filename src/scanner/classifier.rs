//! Path classification: ignore rules and language resolution
//!
//! Every decision is made on the path relative to the scan root, so where a
//! repository is checked out never changes what is kept.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::ScanConfig;
use crate::language::{normalize_extension, LanguageTable, LanguageTag};
use crate::utils::ignore::IgnorePatterns;

/// Why an entry was left out of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    IgnoredDirectory,
    Hidden,
    DeniedExtension,
    CustomPattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub ignored: bool,
    pub reason: Option<IgnoreReason>,
    /// `Unknown` for directories and unrecognized extensions
    pub language: LanguageTag,
}

impl Classification {
    fn ignored(reason: IgnoreReason) -> Self {
        Self {
            ignored: true,
            reason: Some(reason),
            language: LanguageTag::Unknown,
        }
    }

    fn kept(language: LanguageTag) -> Self {
        Self {
            ignored: false,
            reason: None,
            language,
        }
    }
}

/// Pure function of configuration and relative path
#[derive(Debug, Clone)]
pub struct PathClassifier {
    ignore_dirs: HashSet<String>,
    ignore_extensions: Vec<String>,
    include_hidden: bool,
    hidden_allowlist: HashSet<String>,
    patterns: IgnorePatterns,
    languages: LanguageTable,
}

impl PathClassifier {
    /// `extra_patterns` are appended to `config.ignore_patterns` (e.g. the
    /// contents of `.geniusignore`)
    pub fn new(config: &ScanConfig, extra_patterns: &[String]) -> Self {
        let patterns: Vec<&str> = config
            .ignore_patterns
            .iter()
            .chain(extra_patterns)
            .map(String::as_str)
            .collect();

        Self {
            ignore_dirs: config.ignore_dirs.iter().cloned().collect(),
            ignore_extensions: config
                .ignore_extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            include_hidden: config.include_hidden,
            hidden_allowlist: config.hidden_allowlist.iter().cloned().collect(),
            patterns: IgnorePatterns::new(&patterns),
            languages: LanguageTable::new(&config.extension_languages),
        }
    }

    /// Classify an entry by its relative Unix-style path
    ///
    /// Rules, first match wins: ignored directory segment, hidden base name,
    /// denied file extension, custom pattern.
    pub fn classify(&self, relative: &str, is_dir: bool) -> Classification {
        let mut segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some(base_name) = segments.pop() else {
            // The root itself
            return Classification::kept(LanguageTag::Unknown);
        };

        // A file's own name is not a directory segment
        let ignored_segment = segments
            .iter()
            .chain(is_dir.then_some(&base_name))
            .any(|segment| self.ignore_dirs.contains(*segment));
        if ignored_segment {
            return Classification::ignored(IgnoreReason::IgnoredDirectory);
        }

        if base_name.starts_with('.')
            && !self.include_hidden
            && !self.hidden_allowlist.contains(base_name)
        {
            return Classification::ignored(IgnoreReason::Hidden);
        }

        if !is_dir {
            let lower = base_name.to_ascii_lowercase();
            if self.ignore_extensions.iter().any(|ext| lower.ends_with(ext.as_str())) {
                return Classification::ignored(IgnoreReason::DeniedExtension);
            }
        }

        if self.patterns.is_ignored(relative) {
            return Classification::ignored(IgnoreReason::CustomPattern);
        }

        if is_dir {
            Classification::kept(LanguageTag::Unknown)
        } else {
            Classification::kept(self.languages.resolve(base_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PathClassifier {
        PathClassifier::new(&ScanConfig::default(), &[])
    }

    #[test]
    fn test_ignored_directory_segments() {
        let c = classifier();
        assert_eq!(
            c.classify(".git", true).reason,
            Some(IgnoreReason::IgnoredDirectory)
        );
        assert!(c.classify("web/node_modules/react/index.js", false).ignored);
        assert!(c.classify("src/__pycache__", true).ignored);
        // A file that shares a directory's name is kept
        assert!(!c.classify("scripts/build", false).ignored);
    }

    #[test]
    fn test_hidden_entries() {
        let c = classifier();
        assert_eq!(c.classify(".env", false).reason, Some(IgnoreReason::Hidden));
        assert_eq!(c.classify("src/.cache", true).reason, Some(IgnoreReason::Hidden));

        let config = ScanConfig {
            hidden_allowlist: vec![".github".to_string()],
            ..ScanConfig::default()
        };
        let c = PathClassifier::new(&config, &[]);
        assert!(!c.classify(".github", true).ignored);
        assert!(c.classify(".circleci", true).ignored);

        let config = ScanConfig {
            include_hidden: true,
            ..ScanConfig::default()
        };
        let c = PathClassifier::new(&config, &[]);
        assert!(!c.classify(".env", false).ignored);
        // Ignore-dir rule still applies first
        assert!(c.classify(".git", true).ignored);
    }

    #[test]
    fn test_denied_extensions_case_insensitive() {
        let c = classifier();
        assert_eq!(
            c.classify("assets/Logo.PNG", false).reason,
            Some(IgnoreReason::DeniedExtension)
        );
        assert!(c.classify("pkg/module.pyc", false).ignored);
        // Extensions only apply to files
        assert!(!c.classify("docs.png", true).ignored);
    }

    #[test]
    fn test_custom_patterns() {
        let config = ScanConfig {
            ignore_patterns: vec!["*.min.js".to_string()],
            ..ScanConfig::default()
        };
        let c = PathClassifier::new(&config, &["generated/".to_string()]);
        assert_eq!(
            c.classify("static/app.min.js", false).reason,
            Some(IgnoreReason::CustomPattern)
        );
        assert!(c.classify("src/generated", true).ignored);
        assert!(c.classify("src/generated/api.py", false).ignored);
        assert!(!c.classify("src/my-generated/api.py", false).ignored);
    }

    #[test]
    fn test_language_resolution() {
        let c = classifier();
        assert_eq!(c.classify("src/main.py", false).language, LanguageTag::Python);
        assert_eq!(c.classify("app/walker.jac", false).language, LanguageTag::Jac);
        assert_eq!(c.classify("types/index.d.ts", false).language, LanguageTag::TypeScript);
        assert_eq!(c.classify("Makefile", false).language, LanguageTag::Unknown);
        assert_eq!(c.classify("src", true).language, LanguageTag::Unknown);
    }

    #[test]
    fn test_root_is_kept() {
        let c = classifier();
        assert!(!c.classify("", true).ignored);
    }
}
