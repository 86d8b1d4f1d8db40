//! The seam between the dispatcher and the per-language matchers.

use crate::applier::StyleApplier;
use crate::style::StyleCategory;
use crate::text::StyledRange;
use slidecode_lang::{CodeScope, Language};

/// Caller-supplied style for identifiers no matcher pass claimed.
pub type IdentifierStyle<'a> = &'a dyn Fn(&str) -> Option<StyleCategory>;

/// Per-call options shared by every matcher.
#[derive(Clone, Copy, Default)]
pub struct MatchOptions<'a> {
    /// Whether the text is a whole document or a fragment.
    pub scope: CodeScope,
    /// Optional style for otherwise-unstyled identifiers.
    pub identifier_style: Option<IdentifierStyle<'a>>,
}

impl<'a> MatchOptions<'a> {
    /// Options for a text in `scope`.
    pub fn new(scope: CodeScope) -> Self {
        Self {
            scope,
            identifier_style: None,
        }
    }

    /// Set the identifier style callback.
    pub fn with_identifier_style(mut self, identifier_style: IdentifierStyle<'a>) -> Self {
        self.identifier_style = Some(identifier_style);
        self
    }
}

impl std::fmt::Debug for MatchOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchOptions")
            .field("scope", &self.scope)
            .field("identifier_style", &self.identifier_style.is_some())
            .finish()
    }
}

/// A language-specific highlighter.
///
/// Implementations are pure: the same text and options always produce the same ranges, and
/// they never fail. Malformed input is highlighted on a best-effort basis.
pub trait Matcher {
    /// The language this matcher highlights.
    fn language(&self) -> Language;

    /// Record styles for `applier.text()` into `applier`.
    fn apply(&self, applier: &mut StyleApplier<'_>, options: &MatchOptions<'_>);

    /// Highlight `text` and return resolved character ranges.
    fn highlight(&self, text: &str, options: &MatchOptions<'_>) -> Vec<StyledRange> {
        let mut applier = StyleApplier::new(text);
        self.apply(&mut applier, options);
        applier.finish()
    }
}
