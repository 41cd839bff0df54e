//! Language Support - extension table and tree-sitter grammar lookup
//!
//! This module is the single source of truth for which languages the scanner
//! recognizes, which file extensions they own, and which of them have a
//! tree-sitter grammar available for the syntax-tree extraction strategy.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Language a file has been classified as.
///
/// `Unknown` is a real tag rather than an absent value: files of unknown
/// language still appear in the tree and in the language histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Python,
    Jac,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Rust,
    Go,
    Ruby,
    Php,
    Kotlin,
    Unknown,
}

impl LanguageTag {
    /// Every known language, `Unknown` excluded
    pub const ALL: [LanguageTag; 12] = [
        LanguageTag::Python,
        LanguageTag::Jac,
        LanguageTag::JavaScript,
        LanguageTag::TypeScript,
        LanguageTag::Java,
        LanguageTag::C,
        LanguageTag::Cpp,
        LanguageTag::Rust,
        LanguageTag::Go,
        LanguageTag::Ruby,
        LanguageTag::Php,
        LanguageTag::Kotlin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Python => "python",
            LanguageTag::Jac => "jac",
            LanguageTag::JavaScript => "javascript",
            LanguageTag::TypeScript => "typescript",
            LanguageTag::Java => "java",
            LanguageTag::C => "c",
            LanguageTag::Cpp => "cpp",
            LanguageTag::Rust => "rust",
            LanguageTag::Go => "go",
            LanguageTag::Ruby => "ruby",
            LanguageTag::Php => "php",
            LanguageTag::Kotlin => "kotlin",
            LanguageTag::Unknown => "unknown",
        }
    }

    /// Whether a tree-sitter grammar is compiled in for this language
    pub fn has_grammar(&self) -> bool {
        matches!(
            self,
            LanguageTag::Python
                | LanguageTag::JavaScript
                | LanguageTag::TypeScript
                | LanguageTag::Java
                | LanguageTag::C
                | LanguageTag::Cpp
                | LanguageTag::Rust
                | LanguageTag::Go
        )
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match s.to_ascii_lowercase().as_str() {
            "python" => LanguageTag::Python,
            "jac" => LanguageTag::Jac,
            "javascript" => LanguageTag::JavaScript,
            "typescript" => LanguageTag::TypeScript,
            "java" => LanguageTag::Java,
            "c" => LanguageTag::C,
            "cpp" => LanguageTag::Cpp,
            "rust" => LanguageTag::Rust,
            "go" => LanguageTag::Go,
            "ruby" => LanguageTag::Ruby,
            "php" => LanguageTag::Php,
            "kotlin" => LanguageTag::Kotlin,
            "unknown" => LanguageTag::Unknown,
            other => anyhow::bail!("Unsupported language: '{}'", other),
        };
        Ok(tag)
    }
}

/// Default extension → language table.
///
/// Extensions are lowercase and include the leading dot. A language may own
/// several extensions; an extension belongs to exactly one language.
pub const DEFAULT_EXTENSIONS: &[(&str, LanguageTag)] = &[
    (".py", LanguageTag::Python),
    (".pyw", LanguageTag::Python),
    (".jac", LanguageTag::Jac),
    (".js", LanguageTag::JavaScript),
    (".jsx", LanguageTag::JavaScript),
    (".mjs", LanguageTag::JavaScript),
    (".cjs", LanguageTag::JavaScript),
    (".ts", LanguageTag::TypeScript),
    (".tsx", LanguageTag::TypeScript),
    (".mts", LanguageTag::TypeScript),
    (".cts", LanguageTag::TypeScript),
    (".d.ts", LanguageTag::TypeScript),
    (".java", LanguageTag::Java),
    (".c", LanguageTag::C),
    (".h", LanguageTag::Cpp),
    (".cpp", LanguageTag::Cpp),
    (".cc", LanguageTag::Cpp),
    (".cxx", LanguageTag::Cpp),
    (".hpp", LanguageTag::Cpp),
    (".hh", LanguageTag::Cpp),
    (".hxx", LanguageTag::Cpp),
    (".rs", LanguageTag::Rust),
    (".go", LanguageTag::Go),
    (".rb", LanguageTag::Ruby),
    (".php", LanguageTag::Php),
    (".kt", LanguageTag::Kotlin),
    (".kts", LanguageTag::Kotlin),
];

/// The default table as an owned map, suitable for configuration
pub fn default_extension_map() -> BTreeMap<String, LanguageTag> {
    DEFAULT_EXTENSIONS
        .iter()
        .map(|(ext, tag)| (ext.to_string(), *tag))
        .collect()
}

/// Normalize a configured extension: lowercase with a single leading dot
pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_ascii_lowercase())
}

/// Longest-match-first extension lookup
///
/// Entries are held sorted by descending suffix length so that a compound
/// extension such as `.d.ts` wins over `.ts`.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    entries: Vec<(String, LanguageTag)>,
}

impl LanguageTable {
    pub fn new(map: &BTreeMap<String, LanguageTag>) -> Self {
        let mut entries: Vec<(String, LanguageTag)> = map
            .iter()
            .map(|(ext, tag)| (normalize_extension(ext), *tag))
            .collect();
        // Stable tie-break on the extension text keeps lookup deterministic
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// Resolve the language of a file from its base name
    pub fn resolve(&self, file_name: &str) -> LanguageTag {
        let lower = file_name.to_ascii_lowercase();
        self.entries
            .iter()
            // A bare ".py" file name is a hidden file, not a Python module
            .find(|(ext, _)| lower.len() > ext.len() && lower.ends_with(ext.as_str()))
            .map(|(_, tag)| *tag)
            .unwrap_or(LanguageTag::Unknown)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new(&default_extension_map())
    }
}

/// Detect a file's language using the default extension table
pub fn detect_language(file_path: &str) -> LanguageTag {
    let name = file_path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file_path);
    LanguageTable::default().resolve(name)
}

/// Get the tree-sitter grammar for a language
///
/// The file path is consulted only where one language needs two grammars
/// (TypeScript vs. TSX).
pub fn get_tree_sitter_language(language: LanguageTag, file_path: &str) -> Result<tree_sitter::Language> {
    match language {
        LanguageTag::Python => Ok(tree_sitter_python::LANGUAGE.into()),
        LanguageTag::JavaScript => Ok(tree_sitter_javascript::LANGUAGE.into()),
        LanguageTag::TypeScript => {
            if file_path.to_ascii_lowercase().ends_with(".tsx") {
                Ok(tree_sitter_typescript::LANGUAGE_TSX.into())
            } else {
                Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            }
        }
        LanguageTag::Java => Ok(tree_sitter_java::LANGUAGE.into()),
        LanguageTag::C => Ok(tree_sitter_c::LANGUAGE.into()),
        LanguageTag::Cpp => Ok(tree_sitter_cpp::LANGUAGE.into()),
        LanguageTag::Rust => Ok(tree_sitter_rust::LANGUAGE.into()),
        LanguageTag::Go => Ok(tree_sitter_go::LANGUAGE.into()),
        other => Err(anyhow::anyhow!(
            "No tree-sitter grammar for '{}'. Grammars: python, javascript, typescript, java, c, cpp, rust, go",
            other
        )),
    }
}
