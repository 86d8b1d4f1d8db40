//! Accumulates styled ranges from matcher passes and resolves them into a flat span list.

use crate::intervals::{Claim, ClaimSet};
use crate::style::StyleCategory;
use crate::text::StyledRange;
use std::ops::Range;

#[derive(Debug, Clone, Copy)]
struct PendingSpan {
    start: usize,
    end: usize,
    category: StyleCategory,
}

/// Collects `(range, category)` pairs over one text.
///
/// Offsets passed in are **byte** offsets into the text (what `regex` and Tree-sitter report).
/// [`StyleApplier::finish`] converts the result to character offsets.
///
/// Two ways to add a style:
/// - [`claim`](Self::claim) records the range so later passes can no longer touch it;
///   first claim wins.
/// - [`overlay`](Self::overlay) paints over whatever is there without claiming, for styles
///   nested inside a claimed range (string interpolation). Later overlays win.
#[derive(Debug, Clone)]
pub struct StyleApplier<'t> {
    text: &'t str,
    claims: ClaimSet,
    spans: Vec<PendingSpan>,
}

impl<'t> StyleApplier<'t> {
    /// Start collecting styles for `text`.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            claims: ClaimSet::new(),
            spans: Vec::new(),
        }
    }

    /// The text being highlighted.
    pub fn text(&self) -> &'t str {
        self.text
    }

    fn is_valid(&self, range: &Range<usize>) -> bool {
        range.start < range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
    }

    /// Claim `range` for `category`.
    ///
    /// Returns `false` (and records nothing) if the range is empty, out of bounds, or overlaps
    /// an earlier claim.
    pub fn claim(&mut self, range: Range<usize>, category: StyleCategory) -> bool {
        if !self.is_valid(&range) || self.claims.overlaps(range.start, range.end) {
            return false;
        }

        self.claims.insert(Claim::new(range.start, range.end));
        self.push(range, category);
        true
    }

    /// Claim `range`, evicting earlier claims that *start* inside it.
    ///
    /// Fails if `range.start` lies inside an existing claim. Comments use this: a `#` inside a
    /// string is not a comment, but a string inside a comment is part of the comment.
    pub fn claim_evicting(&mut self, range: Range<usize>, category: StyleCategory) -> bool {
        if !self.is_valid(&range) || self.claims.contains(range.start) {
            return false;
        }

        let evicted = self.claims.remove_starting_within(range.start, range.end);
        if !evicted.is_empty() {
            self.spans
                .retain(|span| span.start < range.start || span.start >= range.end);
        }

        self.claims.insert(Claim::new(range.start, range.end));
        self.push(range, category);
        true
    }

    /// Paint `range` with `category` without claiming it.
    ///
    /// [`StyleCategory::Plain`] can be used to clear an earlier style.
    pub fn overlay(&mut self, range: Range<usize>, category: StyleCategory) {
        if self.is_valid(&range) {
            self.push(range, category);
        }
    }

    fn push(&mut self, range: Range<usize>, category: StyleCategory) {
        self.spans.push(PendingSpan {
            start: range.start,
            end: range.end,
            category,
        });
    }

    /// Returns `true` if `pos` lies inside a claimed range.
    pub fn is_claimed(&self, pos: usize) -> bool {
        self.claims.contains(pos)
    }

    /// The claimed range containing `pos`, if any.
    pub fn claim_at(&self, pos: usize) -> Option<Range<usize>> {
        self.claims.claim_at(pos).map(|c| c.range())
    }

    /// Returns `true` if `range` overlaps any claimed range.
    pub fn overlaps_claim(&self, range: Range<usize>) -> bool {
        self.claims.overlaps(range.start, range.end)
    }

    /// The claims recorded so far.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Resolve every recorded span into sorted, non-overlapping character ranges.
    ///
    /// Later spans win where they overlap earlier ones. `Plain` runs are dropped and adjacent
    /// runs of the same category are merged.
    pub fn finish(self) -> Vec<StyledRange> {
        if self.spans.is_empty() {
            return Vec::new();
        }

        let mut paint: Vec<Option<StyleCategory>> = vec![None; self.text.len()];
        for span in &self.spans {
            paint[span.start..span.end].fill(Some(span.category));
        }

        let mut out: Vec<StyledRange> = Vec::new();
        for (char_idx, (byte_idx, _)) in self.text.char_indices().enumerate() {
            let category = match paint[byte_idx] {
                Some(StyleCategory::Plain) | None => continue,
                Some(category) => category,
            };

            match out.last_mut() {
                Some(last) if last.end == char_idx && last.category == category => {
                    last.end += 1;
                }
                _ => out.push(StyledRange::new(char_idx, char_idx + 1, category)),
            }
        }

        out
    }
}
