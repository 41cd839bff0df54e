//! Declaration and import pattern tables for the heuristic strategy.
//!
//! Patterns are compiled once per process. Named groups:
//! `name` (required), `params`, `supers` and `async` (optional) for
//! declarations; `module` for imports.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

use crate::extractors::base::SymbolCategory;
use crate::language::LanguageTag;

/// One declaration pattern before compilation
struct DeclarationSource {
    category: SymbolCategory,
    construct: &'static str,
    pattern: &'static str,
}

const fn function(construct: &'static str, pattern: &'static str) -> DeclarationSource {
    DeclarationSource {
        category: SymbolCategory::Function,
        construct,
        pattern,
    }
}

const fn type_decl(construct: &'static str, pattern: &'static str) -> DeclarationSource {
    DeclarationSource {
        category: SymbolCategory::Type,
        construct,
        pattern,
    }
}

/// A compiled declaration pattern
pub(super) struct DeclarationPattern {
    pub category: SymbolCategory,
    pub construct: &'static str,
    pub regex: Regex,
}

/// Compiled pattern tables for one language, applied in order
#[derive(Default)]
pub(super) struct LanguagePatterns {
    pub declarations: Vec<DeclarationPattern>,
    pub imports: Vec<Regex>,
}

const JAC_DECLARATIONS: &[DeclarationSource] = &[
    type_decl("walker", r"\bwalker\s+(?P<name>\w+)"),
    type_decl("node", r"\bnode\s+(?P<name>\w+)"),
    type_decl("edge", r"(?m)^\s*edge\s+(?P<name>\w+)"),
    type_decl("object", r"(?m)^\s*obj\s+(?P<name>\w+)"),
    function("ability", r"\bcan\s+(?P<name>\w+)\s+with"),
];

const JAC_IMPORTS: &[&str] = &[
    r"(?m)^\s*import\s*(?::\s*\w+\s+)?(?:from\s+)?(?P<module>[\w.]+)",
    r"(?m)^\s*include\s*(?::\s*\w+\s+)?(?P<module>[\w.]+)",
];

const PYTHON_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*class\s+(?P<name>\w+)\s*(?:\((?P<supers>[^)]*)\))?\s*:",
    ),
    function(
        "function",
        r"(?m)^\s*(?P<async>async\s+)?def\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)",
    ),
];

const PYTHON_IMPORTS: &[&str] = &[
    r"(?m)^\s*import\s+(?P<module>[\w.]+)",
    r"(?m)^\s*from\s+(?P<module>[\w.]+)\s+import\b",
];

const JAVASCRIPT_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(?P<name>\w+)(?:\s+extends\s+(?P<supers>[\w.]+))?",
    ),
    type_decl(
        "interface",
        r"(?m)^\s*(?:export\s+)?interface\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s+extends\s+(?P<supers>[^{]+))?",
    ),
    type_decl("enum", r"(?m)^\s*(?:export\s+)?(?:const\s+)?enum\s+(?P<name>\w+)"),
    function(
        "function",
        r"(?m)^\s*(?:export\s+)?(?:default\s+)?(?P<async>async\s+)?function\s*\*?\s*(?P<name>\w+)\s*(?:<[^>]*>)?\((?P<params>[^)]*)\)",
    ),
    function(
        "arrow_function",
        r"(?m)^\s*(?:export\s+)?(?:const|let|var)\s+(?P<name>\w+)\s*(?::[^=]+)?=\s*(?P<async>async\s+)?\((?P<params>[^)]*)\)\s*(?::[^=]+)?=>",
    ),
];

const JAVASCRIPT_IMPORTS: &[&str] = &[
    r#"(?m)^\s*import\s+(?:[^'"]*?\s+from\s+)?['"](?P<module>[^'"]+)['"]"#,
    r#"\brequire\(\s*['"](?P<module>[^'"]+)['"]\s*\)"#,
];

const JAVA_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*(?:(?:public|private|protected|abstract|final|static|sealed)\s+)*class\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s+extends\s+(?P<supers>[\w.]+))?",
    ),
    type_decl(
        "interface",
        r"(?m)^\s*(?:(?:public|private|protected|static|sealed)\s+)*interface\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s+extends\s+(?P<supers>[\w.,\s]+?))?\s*\{",
    ),
    type_decl(
        "enum",
        r"(?m)^\s*(?:(?:public|private|protected|static)\s+)*enum\s+(?P<name>\w+)",
    ),
    type_decl(
        "record",
        r"(?m)^\s*(?:(?:public|private|protected|static|final)\s+)*record\s+(?P<name>\w+)",
    ),
    function(
        "method",
        r"(?m)^\s*(?:(?:public|private|protected|static|final|abstract|synchronized|native|default)\s+)+[\w<>\[\],.?\s]*?\b(?P<name>\w+)\s*\(",
    ),
];

const JAVA_IMPORTS: &[&str] = &[r"(?m)^\s*import\s+(?:static\s+)?(?P<module>[\w.]+(?:\.\*)?)\s*;"];

const C_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*class\s+(?P<name>\w+)(?:\s*:\s*(?:public|private|protected)?\s*(?:virtual\s+)?(?P<supers>[\w:]+))?\s*\{",
    ),
    type_decl(
        "struct",
        r"(?m)^\s*(?:typedef\s+)?struct\s+(?P<name>\w+)(?:\s*:\s*(?:public|private|protected)?\s*(?P<supers>[\w:]+))?\s*\{",
    ),
    type_decl("union", r"(?m)^\s*(?:typedef\s+)?union\s+(?P<name>\w+)\s*\{"),
    type_decl("enum", r"(?m)^\s*(?:typedef\s+)?enum\s+(?:class\s+)?(?P<name>\w+)"),
    function(
        "function",
        r"(?m)^[\w*&:<>, \t]*?\b(?P<name>[A-Za-z_]\w*)\s*\([^;{)]*\)\s*(?:const\s*)?\{",
    ),
];

const C_IMPORTS: &[&str] = &[r#"(?m)^\s*#\s*include\s*[<"](?P<module>[^>"]+)[>"]"#];

const RUST_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "struct",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?struct\s+(?P<name>\w+)",
    ),
    type_decl("enum", r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?enum\s+(?P<name>\w+)"),
    type_decl("union", r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?union\s+(?P<name>\w+)"),
    type_decl(
        "trait",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:unsafe\s+)?trait\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s*:\s*(?P<supers>[^{\n]+?))?\s*(?:\{|where)",
    ),
    function(
        "function",
        r#"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?(?P<async>async\s+)?(?:unsafe\s+)?(?:extern\s+"[^"]*"\s+)?fn\s+(?P<name>\w+)"#,
    ),
];

const RUST_IMPORTS: &[&str] = &[
    r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+(?P<module>[\w:]+)",
    r"(?m)^\s*extern\s+crate\s+(?P<module>\w+)",
];

const GO_DECLARATIONS: &[DeclarationSource] = &[
    type_decl("struct", r"(?m)^type\s+(?P<name>\w+)\s+struct\b"),
    type_decl("interface", r"(?m)^type\s+(?P<name>\w+)\s+interface\b"),
    function(
        "function",
        r"(?m)^func\s+(?:\([^)]*\)\s*)?(?P<name>\w+)\s*[\[(]",
    ),
];

const GO_IMPORTS: &[&str] = &[
    r#"(?m)^\s*import\s+(?:[\w.]+\s+)?"(?P<module>[^"]+)""#,
    r#"(?m)^\s+(?:[\w.]+\s+)?"(?P<module>[^"]+)"\s*$"#,
];

const RUBY_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*class\s+(?P<name>[A-Z][\w:]*)(?:\s*<\s*(?P<supers>[A-Z][\w:]*))?",
    ),
    type_decl("module", r"(?m)^\s*module\s+(?P<name>[A-Z][\w:]*)"),
    function(
        "method",
        r"(?m)^\s*def\s+(?:self\.)?(?P<name>[\w?!=]+)[ \t]*(?:\((?P<params>[^)]*)\))?",
    ),
];

const RUBY_IMPORTS: &[&str] =
    &[r#"(?m)^\s*require(?:_relative)?\s*\(?\s*['"](?P<module>[^'"]+)['"]"#];

const PHP_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*(?:(?:abstract|final|readonly)\s+)*class\s+(?P<name>\w+)(?:\s+extends\s+(?P<supers>[\w\\]+))?",
    ),
    type_decl(
        "interface",
        r"(?m)^\s*interface\s+(?P<name>\w+)(?:\s+extends\s+(?P<supers>[\w\\,\s]+?))?\s*\{",
    ),
    type_decl("trait", r"(?m)^\s*trait\s+(?P<name>\w+)"),
    type_decl("enum", r"(?m)^\s*enum\s+(?P<name>\w+)"),
    function(
        "function",
        r"(?m)^\s*(?:(?:public|private|protected|static|abstract|final)\s+)*function\s+&?(?P<name>\w+)\s*\((?P<params>[^)]*)\)",
    ),
];

const PHP_IMPORTS: &[&str] = &[
    r"(?m)^\s*use\s+(?P<module>[\w\\]+)",
    r#"\b(?:require|include)(?:_once)?\s*\(?\s*['"](?P<module>[^'"]+)['"]"#,
];

const KOTLIN_DECLARATIONS: &[DeclarationSource] = &[
    type_decl(
        "class",
        r"(?m)^\s*(?:(?:public|private|internal|protected|open|abstract|sealed|data|enum|annotation|inner|value)\s+)*class\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s*(?:(?:public|private|internal|protected)\s+)?(?:constructor\s*)?\([^)]*\))?(?:\s*:\s*(?P<supers>[^{\n]+))?",
    ),
    type_decl(
        "interface",
        r"(?m)^\s*(?:(?:public|private|internal|sealed|fun)\s+)*interface\s+(?P<name>\w+)(?:<[^>]*>)?(?:\s*:\s*(?P<supers>[^{\n]+))?",
    ),
    type_decl("object", r"(?m)^\s*(?:companion\s+)?object\s+(?P<name>\w+)"),
    function(
        "function",
        r"(?m)^\s*(?:(?:public|private|internal|protected|open|override|abstract|inline|operator|infix|tailrec|(?P<async>suspend))\s+)*fun\s+(?:<[^>]*>\s*)?(?:[\w.]+\.)?(?P<name>\w+)\s*\((?P<params>[^)]*)\)",
    ),
];

const KOTLIN_IMPORTS: &[&str] = &[r"(?m)^\s*import\s+(?P<module>[\w.]+(?:\.\*)?)"];

const NO_DECLARATIONS: &[DeclarationSource] = &[];
const NO_IMPORTS: &[&str] = &[];

fn sources(language: LanguageTag) -> (&'static [DeclarationSource], &'static [&'static str]) {
    match language {
        LanguageTag::Jac => (JAC_DECLARATIONS, JAC_IMPORTS),
        LanguageTag::Python => (PYTHON_DECLARATIONS, PYTHON_IMPORTS),
        LanguageTag::JavaScript | LanguageTag::TypeScript => {
            (JAVASCRIPT_DECLARATIONS, JAVASCRIPT_IMPORTS)
        }
        LanguageTag::Java => (JAVA_DECLARATIONS, JAVA_IMPORTS),
        LanguageTag::C | LanguageTag::Cpp => (C_DECLARATIONS, C_IMPORTS),
        LanguageTag::Rust => (RUST_DECLARATIONS, RUST_IMPORTS),
        LanguageTag::Go => (GO_DECLARATIONS, GO_IMPORTS),
        LanguageTag::Ruby => (RUBY_DECLARATIONS, RUBY_IMPORTS),
        LanguageTag::Php => (PHP_DECLARATIONS, PHP_IMPORTS),
        LanguageTag::Kotlin => (KOTLIN_DECLARATIONS, KOTLIN_IMPORTS),
        LanguageTag::Unknown => (NO_DECLARATIONS, NO_IMPORTS),
    }
}

fn compile(pattern: &str, language: LanguageTag) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("Skipping invalid {} heuristic pattern: {}", language, e);
            None
        }
    }
}

static PATTERNS: Lazy<HashMap<LanguageTag, LanguagePatterns>> = Lazy::new(|| {
    LanguageTag::ALL
        .iter()
        .map(|&language| {
            let (declarations, imports) = sources(language);
            let patterns = LanguagePatterns {
                declarations: declarations
                    .iter()
                    .filter_map(|source| {
                        Some(DeclarationPattern {
                            category: source.category,
                            construct: source.construct,
                            regex: compile(source.pattern, language)?,
                        })
                    })
                    .collect(),
                imports: imports
                    .iter()
                    .filter_map(|pattern| compile(pattern, language))
                    .collect(),
            };
            (language, patterns)
        })
        .collect()
});

static EMPTY: Lazy<LanguagePatterns> = Lazy::new(LanguagePatterns::default);

/// Compiled tables for `language`
pub(super) fn patterns_for(language: LanguageTag) -> &'static LanguagePatterns {
    PATTERNS.get(&language).unwrap_or(&EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        for language in LanguageTag::ALL {
            let (declarations, imports) = sources(language);
            for source in declarations {
                assert!(Regex::new(source.pattern).is_ok(), "{}", source.pattern);
            }
            for pattern in imports {
                assert!(Regex::new(pattern).is_ok(), "{}", pattern);
            }
        }
    }

    #[test]
    fn test_every_declaration_has_a_name_group() {
        for language in LanguageTag::ALL {
            for pattern in &patterns_for(language).declarations {
                assert!(pattern.regex.capture_names().any(|n| n == Some("name")));
            }
        }
    }
}
