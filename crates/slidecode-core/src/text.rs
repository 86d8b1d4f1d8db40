//! Highlighting output: styled ranges over the original text.

use crate::style::{CodeStyle, SpanStyle, StyleCategory};
use std::ops::Range;

/// A `[start, end)` character range styled with a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyledRange {
    /// Start offset (characters)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Category
    pub category: StyleCategory,
}

impl StyledRange {
    /// Create a styled range for `[start, end)`.
    pub fn new(start: usize, end: usize, category: StyleCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Check if the range contains a character offset.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two ranges overlap.
    pub fn overlaps(&self, other: &StyledRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for an empty range.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A contiguous slice of the text with a single style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The slice of the original text.
    pub text: &'a str,
    /// Character range of the slice.
    pub range: (usize, usize),
    /// Category (`Plain` for unstyled text).
    pub category: StyleCategory,
    /// Visual style of `category` in the palette.
    pub style: &'a SpanStyle,
}

/// Text annotated with styled ranges.
///
/// Spans are sorted, non-overlapping and never `Plain`; everything between them is plain text.
/// [`segments`](Self::segments) walks the whole text, so joining segment texts gives back the
/// original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedText {
    text: String,
    spans: Vec<StyledRange>,
    style: CodeStyle,
}

impl HighlightedText {
    /// Build from styled ranges over `text`.
    ///
    /// Ranges may come in any order. Where they overlap, the later one wins, and a later `Plain`
    /// range clears the style underneath it. Empty and out-of-bounds ranges are dropped.
    pub fn new(text: impl Into<String>, spans: Vec<StyledRange>, style: CodeStyle) -> Self {
        let text = text.into();
        let spans = normalize_spans(&spans, text.chars().count());
        Self { text, spans, style }
    }

    /// Text without any styling.
    pub fn plain(text: impl Into<String>, style: CodeStyle) -> Self {
        Self::new(text, Vec::new(), style)
    }

    /// The original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Styled ranges (character offsets), sorted by start.
    pub fn spans(&self) -> &[StyledRange] {
        &self.spans
    }

    /// The palette the text was highlighted with.
    pub fn style(&self) -> &CodeStyle {
        &self.style
    }

    /// Split into text, spans and palette.
    pub fn into_parts(self) -> (String, Vec<StyledRange>, CodeStyle) {
        (self.text, self.spans, self.style)
    }

    /// Category at a character offset.
    pub fn category_at(&self, pos: usize) -> StyleCategory {
        let idx = self.spans.partition_point(|s| s.end <= pos);
        match self.spans.get(idx) {
            Some(span) if span.contains(pos) => span.category,
            _ => StyleCategory::Plain,
        }
    }

    /// Slices of the text styled with `category`, in order.
    pub fn texts_of(&self, category: StyleCategory) -> Vec<&str> {
        self.segments()
            .into_iter()
            .filter(|s| s.category == category)
            .map(|s| s.text)
            .collect()
    }

    /// Cover the whole text with segments, plain runs included.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut boundaries = CharBoundaries::new(&self.text);
        let mut char_pos = 0usize;

        for span in &self.spans {
            if span.start > char_pos {
                out.push(self.segment(&mut boundaries, char_pos..span.start, StyleCategory::Plain));
            }
            out.push(self.segment(&mut boundaries, span.start..span.end, span.category));
            char_pos = span.end;
        }

        let char_count = boundaries.char_count();
        if char_pos < char_count {
            out.push(self.segment(&mut boundaries, char_pos..char_count, StyleCategory::Plain));
        }

        out
    }

    fn segment<'a>(
        &'a self,
        boundaries: &mut CharBoundaries<'_>,
        range: Range<usize>,
        category: StyleCategory,
    ) -> Segment<'a> {
        let start = boundaries.byte_offset(range.start);
        let end = boundaries.byte_offset(range.end);
        Segment {
            text: &self.text[start..end],
            range: (range.start, range.end),
            category,
            style: self.style.style(category),
        }
    }
}

/// Paint `spans` in order over `char_count` cells and read back sorted, merged runs.
fn normalize_spans(spans: &[StyledRange], char_count: usize) -> Vec<StyledRange> {
    let spans: Vec<&StyledRange> = spans
        .iter()
        .filter(|s| !s.is_empty() && s.end <= char_count)
        .collect();
    if spans.is_empty() {
        return Vec::new();
    }
    let sorted = spans.windows(2).all(|w| w[0].end <= w[1].start);
    if sorted {
        return spans
            .into_iter()
            .filter(|s| s.category != StyleCategory::Plain)
            .copied()
            .collect();
    }

    let mut paint = vec![StyleCategory::Plain; char_count];
    for span in &spans {
        paint[span.start..span.end].fill(span.category);
    }

    let mut out: Vec<StyledRange> = Vec::new();
    for (pos, &category) in paint.iter().enumerate() {
        if category == StyleCategory::Plain {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.end == pos && last.category == category => last.end += 1,
            _ => out.push(StyledRange::new(pos, pos + 1, category)),
        }
    }
    out
}

/// Forward-only char → byte offset conversion.
struct CharBoundaries<'a> {
    text: &'a str,
    char_pos: usize,
    byte_pos: usize,
}

impl<'a> CharBoundaries<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            char_pos: 0,
            byte_pos: 0,
        }
    }

    fn byte_offset(&mut self, char_offset: usize) -> usize {
        if char_offset < self.char_pos {
            self.char_pos = 0;
            self.byte_pos = 0;
        }
        let rest = &self.text[self.byte_pos..];
        let delta = rest
            .char_indices()
            .nth(char_offset - self.char_pos)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.byte_pos += delta;
        self.char_pos = char_offset;
        self.byte_pos
    }

    fn char_count(&self) -> usize {
        self.char_pos + self.text[self.byte_pos..].chars().count()
    }
}
