#![warn(missing_docs)]
//! `slidecode-highlight-simple` - Regex-based highlighters for `slidecode`.
//!
//! Covers the build and configuration formats that don't need a real parser: the Gradle Kotlin
//! and Groovy DSLs, YAML, TOML, HOCON and Java properties. Each language is an ordered list of
//! [`RegexRule`] passes; earlier passes win (strings before comments before keywords, and so on).
//!
//! ```rust
//! use slidecode_core::{Language, MatchOptions, Matcher, StyleCategory};
//! use slidecode_highlight_simple::matcher_for;
//!
//! let yaml = matcher_for(Language::Yaml).unwrap();
//! let ranges = yaml.highlight("key: value\n# comment\n", &MatchOptions::default());
//! assert_eq!(ranges[0].category, StyleCategory::Keyword);
//! assert_eq!(ranges[1].category, StyleCategory::Comment);
//! ```

mod gradle;
mod groovy;
mod hocon;
mod kotlin_dsl;
mod patterns;
mod properties;
mod rule;
mod toml;
mod yaml;

pub use rule::{RegexHighlighter, RegexRule, RuleGuard, RuleMode};

use once_cell::sync::Lazy;
use slidecode_core::Language;

static KOTLIN_DSL: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::kotlin_dsl().expect("valid kotlin dsl regex"));
static GROOVY: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::groovy().expect("valid groovy regex"));
static YAML: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::yaml().expect("valid yaml regex"));
static TOML: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::toml().expect("valid toml regex"));
static HOCON: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::hocon().expect("valid hocon regex"));
static PROPERTIES: Lazy<RegexHighlighter> =
    Lazy::new(|| RegexHighlighter::properties().expect("valid properties regex"));

/// The shared highlighter for `language`, compiled on first use.
///
/// Returns `None` for languages without a regex highlighter (XML is parsed, plain text is left
/// unstyled).
pub fn matcher_for(language: Language) -> Option<&'static RegexHighlighter> {
    match language {
        Language::KotlinDsl => Some(&KOTLIN_DSL),
        Language::Groovy => Some(&GROOVY),
        Language::Yaml => Some(&YAML),
        Language::Toml => Some(&TOML),
        Language::Hocon => Some(&HOCON),
        Language::Properties => Some(&PROPERTIES),
        Language::Xml | Language::Text => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidecode_core::Matcher;

    #[test]
    fn test_matcher_for_reports_its_language() {
        for language in Language::ALL {
            match matcher_for(language) {
                Some(matcher) => assert_eq!(matcher.language(), language),
                None => assert!(matches!(language, Language::Xml | Language::Text)),
            }
        }
    }
}
