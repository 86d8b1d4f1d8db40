#![warn(missing_docs)]
//! `slidecode-lang` - language identification helpers for `slidecode`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any regex or parsing
//! machinery. It provides the closed [`Language`] set the highlighter dispatches on, the
//! [`CodeScope`] a snippet is highlighted in, and the comment syntax of each language.

mod language;

pub use language::{CodeScope, Language, UnknownLanguage};

/// Comment tokens for a given language.
///
/// Matchers build their comment passes from this table, so a language's comment syntax lives
/// in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment tokens (e.g. `//`, `#`). Some formats accept more than one.
    pub line: &'static [&'static str],
    /// Block comment delimiters (e.g. `("/*", "*/")`).
    pub block: Option<(&'static str, &'static str)>,
    /// Whether a line comment token is only recognised at the start of a line
    /// (after optional whitespace), as in `.properties` files.
    pub line_start_only: bool,
}

impl CommentConfig {
    /// A config without any comment syntax.
    pub const NONE: Self = Self {
        line: &[],
        block: None,
        line_start_only: false,
    };

    /// Create a config that supports only line comments.
    pub const fn line(tokens: &'static [&'static str]) -> Self {
        Self {
            line: tokens,
            block: None,
            line_start_only: false,
        }
    }

    /// Create a config that supports both line and block comments.
    pub const fn line_and_block(
        tokens: &'static [&'static str],
        block_start: &'static str,
        block_end: &'static str,
    ) -> Self {
        Self {
            line: tokens,
            block: Some((block_start, block_end)),
            line_start_only: false,
        }
    }

    /// Create a config that supports only block comments.
    pub const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            line: &[],
            block: Some((start, end)),
            line_start_only: false,
        }
    }

    /// Only recognise line comments at the start of a line.
    pub const fn at_line_start(mut self) -> Self {
        self.line_start_only = true;
        self
    }

    /// Returns `true` if at least one non-empty line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.iter().any(|token| !token.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block
            .is_some_and(|(start, end)| !start.is_empty() && !end.is_empty())
    }
}

impl Language {
    /// Comment syntax of this language.
    pub const fn comments(self) -> CommentConfig {
        match self {
            Self::KotlinDsl | Self::Groovy => CommentConfig::line_and_block(&["//"], "/*", "*/"),
            Self::Xml => CommentConfig::block("<!--", "-->"),
            Self::Yaml | Self::Toml => CommentConfig::line(&["#"]),
            Self::Hocon => CommentConfig::line(&["#", "//"]),
            Self::Properties => CommentConfig::line(&["#", "!"]).at_line_start(),
            Self::Text => CommentConfig::NONE,
        }
    }
}
