use regex::{Captures, Regex};
use slidecode_core::{Language, MatchOptions, Matcher, StyleApplier, StyleCategory};
use std::ops::Range;

/// Extra check run on a candidate match before it is styled.
///
/// Receives the full text and the byte range of the match (or of the styled capture group).
pub type RuleGuard = fn(&str, Range<usize>) -> bool;

/// How a rule's matches are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
    /// Claim each styled group; skipped when it overlaps an earlier claim.
    Claim,
    /// Claim each styled group, evicting earlier claims that start inside it.
    ///
    /// Skipped when the group starts inside an earlier claim. Used for comments.
    ClaimEvicting,
    /// Paint inside an earlier claim whose text starts with `opener`, without claiming.
    ///
    /// Used for string interpolation: the match must lie entirely inside the claim.
    Overlay {
        /// Prefix the enclosing claim must start with (e.g. `"`).
        opener: &'static str,
    },
    /// Offer every unclaimed match to [`MatchOptions::identifier_style`].
    Identifier,
}

/// A single regex highlighting pass.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    groups: Vec<(usize, StyleCategory)>,
    mode: RuleMode,
    guard: Option<RuleGuard>,
}

impl RegexRule {
    /// A rule styling the whole match with `category`.
    pub fn new(pattern: &str, category: StyleCategory) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            groups: vec![(0, category)],
            mode: RuleMode::Claim,
            guard: None,
        })
    }

    /// Highlight only a capture group of each match.
    ///
    /// Matches where the group did not participate are skipped, which lets a pattern consume
    /// text it must not style, e.g. `//[^\n]*|("[^"]*")` finds strings while stepping over
    /// comments.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        for (g, _) in &mut self.groups {
            *g = group;
        }
        self.groups.truncate(1);
        self
    }

    /// Style several capture groups, each with its own category.
    ///
    /// Groups are applied in the given order, so in overlay mode later groups paint over earlier
    /// ones.
    pub fn with_group_styles(mut self, groups: &[(usize, StyleCategory)]) -> Self {
        self.groups = groups.to_vec();
        self
    }

    /// Set how matches are recorded.
    pub fn with_mode(mut self, mode: RuleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for [`RuleMode::ClaimEvicting`].
    pub fn evicting(self) -> Self {
        self.with_mode(RuleMode::ClaimEvicting)
    }

    /// Only style matches accepted by `guard`.
    pub fn with_guard(mut self, guard: RuleGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The recording mode.
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    fn accepts(&self, text: &str, range: &Range<usize>) -> bool {
        self.guard.is_none_or(|guard| guard(text, range.clone()))
    }

    fn apply(&self, applier: &mut StyleApplier<'_>, options: &MatchOptions<'_>) {
        let text = applier.text();

        match self.mode {
            RuleMode::Claim | RuleMode::ClaimEvicting => {
                for caps in self.regex.captures_iter(text) {
                    for &(group, category) in &self.groups {
                        let Some(m) = caps.get(group) else {
                            continue;
                        };
                        let range = m.range();
                        if !self.accepts(text, &range) {
                            continue;
                        }
                        if self.mode == RuleMode::Claim {
                            applier.claim(range, category);
                        } else {
                            applier.claim_evicting(range, category);
                        }
                    }
                }
            }
            RuleMode::Overlay { opener } => {
                for caps in self.regex.captures_iter(text) {
                    self.apply_overlay(applier, &caps, opener);
                }
            }
            RuleMode::Identifier => {
                let Some(identifier_style) = options.identifier_style else {
                    return;
                };
                for m in self.regex.find_iter(text) {
                    let range = m.range();
                    if applier.overlaps_claim(range.clone()) || !self.accepts(text, &range) {
                        continue;
                    }
                    if let Some(category) = identifier_style(m.as_str()) {
                        applier.claim(range, category);
                    }
                }
            }
        }
    }

    fn apply_overlay(&self, applier: &mut StyleApplier<'_>, caps: &Captures<'_>, opener: &str) {
        let text = applier.text();
        let Some(whole) = caps.get(0) else {
            return;
        };
        let Some(enclosing) = applier.claim_at(whole.start()) else {
            return;
        };
        if whole.end() > enclosing.end
            || !text[enclosing.start..].starts_with(opener)
            || whole.start() < enclosing.start + opener.len()
            || !self.accepts(text, &whole.range())
        {
            return;
        }

        for &(group, category) in &self.groups {
            if let Some(m) = caps.get(group) {
                applier.overlay(m.range(), category);
            }
        }
    }
}

/// A regex highlighter: an ordered list of passes for one language.
///
/// Pass order is the tie-break between categories: a pass only claims text no earlier pass
/// claimed. It is *not* intended to be a full parser.
#[derive(Debug, Clone)]
pub struct RegexHighlighter {
    language: Language,
    rules: Vec<RegexRule>,
}

impl RegexHighlighter {
    /// Create a highlighter running `rules` in order.
    pub fn new(language: Language, rules: Vec<RegexRule>) -> Self {
        Self { language, rules }
    }

    /// The passes, in order.
    pub fn rules(&self) -> &[RegexRule] {
        &self.rules
    }
}

impl Matcher for RegexHighlighter {
    fn language(&self) -> Language {
        self.language
    }

    fn apply(&self, applier: &mut StyleApplier<'_>, options: &MatchOptions<'_>) {
        if applier.text().is_empty() {
            return;
        }

        for rule in &self.rules {
            rule.apply(applier, options);
        }

        tracing::trace!(
            language = %self.language,
            passes = self.rules.len(),
            claims = applier.claims().len(),
            "regex highlight"
        );
    }
}

/// Accepts a match not preceded by an odd number of backslashes.
pub(crate) fn not_escaped(text: &str, range: Range<usize>) -> bool {
    let backslashes = text[..range.start]
        .bytes()
        .rev()
        .take_while(|&b| b == b'\\')
        .count();
    backslashes % 2 == 0
}

/// Accepts a match that ends a scalar: followed by whitespace, end of text, or a flow/comment
/// delimiter.
pub(crate) fn standalone_scalar(text: &str, range: Range<usize>) -> bool {
    match text[range.end..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, ',' | ']' | '}' | '#'),
    }
}
