use crate::Highlighter;
use slidecode_core::{HighlightedText, Language};
use std::ops::Range;

/// A sample as displayed in one state: hidden tags removed, markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSample {
    /// The visible text.
    pub text: String,
    /// Character range of the focused tag in [`text`](Self::text).
    ///
    /// `None` without a focus, or when the focused tag is hidden or has no visible text.
    pub focus: Option<Range<usize>>,
    /// Whether the view should scroll to [`focus`](Self::focus).
    pub scroll: bool,
}

impl RenderedSample {
    /// The focused text, if any.
    pub fn focused_text(&self) -> Option<&str> {
        let focus = self.focus.as_ref()?;
        let start = char_to_byte(&self.text, focus.start);
        let end = char_to_byte(&self.text, focus.end);
        self.text.get(start..end)
    }

    /// Highlight the visible text.
    pub fn highlight(&self, highlighter: &Highlighter<'_>, language: Language) -> HighlightedText {
        highlighter.highlight(&self.text, language)
    }
}

fn char_to_byte(text: &str, pos: usize) -> usize {
    text.char_indices().nth(pos).map_or(text.len(), |(i, _)| i)
}

/// Sort and merge byte ranges.
pub(crate) fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.retain(|r| r.start < r.end);
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Where `offset` lands once the (merged, sorted) `hidden` ranges are removed.
pub(crate) fn map_offset(hidden: &[Range<usize>], offset: usize) -> usize {
    let mut removed = 0;
    for range in hidden {
        if range.end <= offset {
            removed += range.end - range.start;
        } else {
            if range.start < offset {
                removed += offset - range.start;
            }
            break;
        }
    }
    offset - removed
}
