//! Regex heuristic extraction.
//!
//! Used for languages without a grammar (Jac, Ruby, PHP, Kotlin) and for any
//! language listed in `ScanConfig::heuristic_languages`. Records carry line 0
//! since matches are not mapped back to source positions.

mod patterns;

use regex::Captures;

use crate::extractors::base::{Extracted, SymbolCategory, SymbolRecord};
use crate::language::LanguageTag;

use self::patterns::{patterns_for, DeclarationPattern};

/// Control-flow keywords that look like calls to the function patterns
const NOT_DECLARATIONS: &[&str] = &[
    "if", "for", "while", "switch", "return", "catch", "sizeof", "else", "do", "new", "elif",
];

pub struct HeuristicExtractor {
    language: LanguageTag,
}

impl HeuristicExtractor {
    pub fn new(language: LanguageTag) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    /// Apply the declaration patterns in order, then the import patterns
    ///
    /// Never fails; an empty result is valid.
    pub fn extract(&self, content: &str) -> Extracted {
        let patterns = patterns_for(self.language);
        let mut extracted = Extracted::default();

        for pattern in &patterns.declarations {
            for caps in pattern.regex.captures_iter(content) {
                if let Some(symbol) = self.build_record(pattern, &caps) {
                    extracted.symbols.push(symbol);
                }
            }
        }

        for regex in &patterns.imports {
            for caps in regex.captures_iter(content) {
                if let Some(module) = caps.name("module") {
                    let module = module.as_str().trim_end_matches(':');
                    if !module.is_empty() {
                        extracted.imports.push(module.to_string());
                    }
                }
            }
        }

        extracted
    }

    fn build_record(&self, pattern: &DeclarationPattern, caps: &Captures) -> Option<SymbolRecord> {
        let name = caps.name("name")?.as_str();
        if NOT_DECLARATIONS.contains(&name) {
            return None;
        }

        let parameters = caps
            .name("params")
            .map(|params| parameter_names(params.as_str(), self.language))
            .unwrap_or_default();
        let supertypes = caps
            .name("supers")
            .map(|supers| supertype_names(supers.as_str(), self.language))
            .unwrap_or_default();

        Some(SymbolRecord {
            category: pattern.category,
            construct: pattern.construct.to_string(),
            name: name.to_string(),
            source_line: 0,
            parameters: if pattern.category == SymbolCategory::Function {
                parameters
            } else {
                Vec::new()
            },
            members: Vec::new(),
            supertypes,
            docstring: String::new(),
            is_async: caps.name("async").is_some(),
            parent: None,
        })
    }
}

/// Parameter names from a raw parameter list
///
/// Splat, rest, block and variadic parameters are left out, as are entries
/// without a plain identifier name.
fn parameter_names(raw: &str, language: LanguageTag) -> Vec<String> {
    raw.split(',')
        .filter_map(|param| {
            let param = param.split('=').next()?.trim();
            if param.starts_with('*')
                || param.starts_with('&')
                || param.starts_with("...")
                || param.starts_with("vararg ")
            {
                return None;
            }

            let name = match language {
                // `?int $count`, `array &$items`, `...$rest`
                LanguageTag::Php => {
                    let var = param.split_whitespace().find(|t| t.starts_with('$'))?;
                    var.trim_start_matches('$')
                }
                // `a: int`, `val id: Long`, `key:` (Ruby keyword argument)
                _ => {
                    let before_type = param.split(':').next()?.trim();
                    before_type.split_whitespace().last()?
                }
            };

            let is_identifier = name
                .chars()
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
                && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            is_identifier.then(|| name.to_string())
        })
        .collect()
}

/// Static base names from a raw supertype list
///
/// Generic arguments and constructor calls are dropped (`Base<T>()` →
/// `Base`); anything that is not a dotted or scoped name is skipped.
fn supertype_names(raw: &str, language: LanguageTag) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    // Split on top-level commas only; `Map<K, V>` is one entry
    for c in raw.chars() {
        match c {
            '<' | '(' | '[' => {
                depth += 1;
                continue;
            }
            '>' | ')' | ']' => {
                depth = depth.saturating_sub(1);
                continue;
            }
            ',' if depth == 0 => {
                names.push(std::mem::take(&mut current));
                continue;
            }
            _ if depth > 0 => continue,
            _ => current.push(c),
        }
    }
    names.push(current);

    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| {
            // Kotlin `by delegate`, Python `metaclass=Meta`
            !name.is_empty()
                && !name.contains('=')
                && !(language == LanguageTag::Kotlin && name.contains(' '))
                && name
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '\\'))
        })
        .collect()
}
