use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of languages the highlighter understands.
///
/// Dispatch is a `match` over this enum, so an unsupported language cannot reach the
/// highlighter. Hosts that start from a file name or a free-form tag go through
/// [`Language::from_path`] / [`Language::from_tag`], which are the only fallible entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// Gradle Kotlin DSL (`*.gradle.kts`) and Kotlin build-script flavoured snippets.
    KotlinDsl,
    /// XML documents and fragments.
    Xml,
    /// YAML.
    Yaml,
    /// TOML (including Gradle version catalogs).
    Toml,
    /// HOCON (`application.conf`).
    Hocon,
    /// Groovy / Gradle Groovy DSL.
    Groovy,
    /// Java `.properties` files.
    Properties,
    /// Plain text; nothing is highlighted.
    Text,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 8] = [
        Self::KotlinDsl,
        Self::Xml,
        Self::Yaml,
        Self::Toml,
        Self::Hocon,
        Self::Groovy,
        Self::Properties,
        Self::Text,
    ];

    /// Canonical tag, as accepted by [`Language::from_tag`] and serde.
    pub fn tag(self) -> &'static str {
        match self {
            Self::KotlinDsl => "kotlin-dsl",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Hocon => "hocon",
            Self::Groovy => "groovy",
            Self::Properties => "properties",
            Self::Text => "text",
        }
    }

    /// Human readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::KotlinDsl => "Kotlin DSL",
            Self::Xml => "XML",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Hocon => "HOCON",
            Self::Groovy => "Groovy",
            Self::Properties => "Properties",
            Self::Text => "Plain Text",
        }
    }

    /// Resolve a language from a tag such as a Markdown fence info string (`kts`, `yml`, ...).
    ///
    /// Matching is ASCII case-insensitive.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownLanguage> {
        let lower = tag.trim().to_ascii_lowercase();
        let language = match lower.as_str() {
            "kotlin-dsl" | "kotlin" | "kts" | "kt" | "gradle-kts" | "gradle.kts" => Self::KotlinDsl,
            "xml" | "pom" | "svg" | "xsd" | "xsl" | "xslt" => Self::Xml,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            "hocon" | "conf" => Self::Hocon,
            "groovy" | "gradle" | "gvy" => Self::Groovy,
            "properties" | "props" | "prop" => Self::Properties,
            "text" | "txt" | "plain" | "" => Self::Text,
            _ => return Err(UnknownLanguage(tag.to_string())),
        };
        Ok(language)
    }

    /// Detect the language of a file from its name.
    ///
    /// Compound extensions are checked first, so `build.gradle.kts` is Kotlin DSL rather than
    /// plain Kotlin and `libs.versions.toml` is TOML.
    pub fn from_path(path: &Path) -> Result<Self, UnknownLanguage> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| UnknownLanguage(path.display().to_string()))?;

        if name.ends_with(".gradle.kts") {
            return Ok(Self::KotlinDsl);
        }
        if name.ends_with(".gradle") {
            return Ok(Self::Groovy);
        }

        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => Self::from_tag(ext).map_err(|_| UnknownLanguage(name.to_string())),
            None => Err(UnknownLanguage(name.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// A language tag or file name did not map to any [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

/// How much of a document a snippet represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeScope {
    /// The text is a complete document.
    #[default]
    File,
    /// The text is a fragment of a larger document (e.g. a few XML elements without a root).
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_through_from_tag() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.tag()), Ok(language));
        }
    }

    #[test]
    fn test_from_tag_aliases_and_case() {
        assert_eq!(Language::from_tag("KTS"), Ok(Language::KotlinDsl));
        assert_eq!(Language::from_tag(" yml "), Ok(Language::Yaml));
        assert_eq!(Language::from_tag("conf"), Ok(Language::Hocon));
        assert_eq!(
            Language::from_tag("brainfuck"),
            Err(UnknownLanguage("brainfuck".to_string()))
        );
    }
}
