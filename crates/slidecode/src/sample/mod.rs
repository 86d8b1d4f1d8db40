//! Code walkthroughs: reveal, hide and focus tagged parts of a sample step by step.
//!
//! A sample is source text with named tag markers:
//!
//! ```text
//! dependencies {
//!     {{core}}
//!     implementation(libs.core)
//!     {{/core}}
//!     {{test}}
//!     testImplementation(libs.junit)
//!     {{/test}}
//! }
//! ```
//!
//! Each step of the walkthrough is a [`SampleState`], derived from the previous one:
//!
//! ```rust
//! use slidecode::sample::CodeSample;
//!
//! let sample = CodeSample::parse("a{{x}} b{{/x}}{{y}} c{{/y}}").unwrap();
//! let states = sample
//!     .start_with(|s| s.hide(["x", "y"]))
//!     .then(|s| s.reveal(["x"]).focus("x"))
//!     .then(|s| s.reveal(["y"]).unfocus())
//!     .build()
//!     .unwrap();
//!
//! let texts: Vec<String> = states.iter().map(|s| sample.render(s).text).collect();
//! assert_eq!(texts, vec!["a", "a b", "a b c"]);
//! ```

mod error;
mod markers;
mod render;
mod state;

pub use error::SampleError;
pub use markers::TagSyntax;
pub use render::RenderedSample;
pub use state::{Focus, SampleState};

use render::{map_offset, merge_ranges};
use std::collections::BTreeMap;
use std::ops::Range;

/// A tagged code sample with its markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    text: String,
    tags: BTreeMap<String, Vec<Range<usize>>>,
}

impl CodeSample {
    /// Parse a sample using `{{name}}` / `{{/name}}` markers.
    pub fn parse(source: &str) -> Result<Self, SampleError> {
        Self::parse_with(source, &TagSyntax::default())
    }

    /// Parse a sample using custom marker delimiters.
    pub fn parse_with(source: &str, syntax: &TagSyntax) -> Result<Self, SampleError> {
        let parsed = markers::parse(source, syntax)?;
        tracing::trace!(tags = parsed.tags.len(), "parsed code sample");
        Ok(Self {
            text: parsed.text,
            tags: parsed.tags,
        })
    }

    /// The full text, markers stripped and everything visible.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tag names, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Whether the sample defines `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Byte ranges of [`text`](Self::text) covered by `tag`, one per occurrence.
    pub fn tag_ranges(&self, tag: &str) -> &[Range<usize>] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every tag `state` refers to exists.
    pub fn validate(&self, state: &SampleState) -> Result<(), SampleError> {
        match state.referenced_tags().find(|tag| !self.has_tag(tag)) {
            Some(tag) => Err(SampleError::UnknownTag(tag.to_string())),
            None => Ok(()),
        }
    }

    /// Start a sequence of states with `first` applied to the fully visible state.
    pub fn start_with(&self, first: impl FnOnce(&SampleState) -> SampleState) -> CodeSequence<'_> {
        CodeSequence {
            sample: self,
            states: vec![first(&SampleState::new())],
        }
    }

    /// The sample as displayed in `state`.
    ///
    /// Tags the sample doesn't define are ignored.
    pub fn render(&self, state: &SampleState) -> RenderedSample {
        let hidden = merge_ranges(
            state
                .hidden()
                .flat_map(|tag| self.tag_ranges(tag).iter().cloned())
                .collect(),
        );

        let mut text = String::with_capacity(self.text.len());
        let mut pos = 0;
        for range in &hidden {
            text.push_str(&self.text[pos..range.start]);
            pos = range.end;
        }
        text.push_str(&self.text[pos..]);

        let focus = state.focused().filter(|f| !state.is_hidden(&f.tag));
        let focus_range = focus.and_then(|f| {
            self.tag_ranges(&f.tag)
                .iter()
                .map(|r| map_offset(&hidden, r.start)..map_offset(&hidden, r.end))
                .filter(|r| r.start < r.end)
                .reduce(|a, b| a.start.min(b.start)..a.end.max(b.end))
        });
        let focus_range =
            focus_range.map(|r| text[..r.start].chars().count()..text[..r.end].chars().count());

        RenderedSample {
            scroll: focus_range.is_some() && focus.is_some_and(|f| f.scroll),
            focus: focus_range,
            text,
        }
    }
}

/// An ordered list of states under construction. See [`CodeSample::start_with`].
#[derive(Debug, Clone)]
pub struct CodeSequence<'s> {
    sample: &'s CodeSample,
    states: Vec<SampleState>,
}

impl<'s> CodeSequence<'s> {
    /// Append the state `next` derives from the last one.
    #[must_use]
    pub fn then(mut self, next: impl FnOnce(&SampleState) -> SampleState) -> Self {
        let state = match self.states.last() {
            Some(last) => next(last),
            None => next(&SampleState::new()),
        };
        self.states.push(state);
        self
    }

    /// The states so far.
    pub fn states(&self) -> &[SampleState] {
        &self.states
    }

    /// Finish the sequence, checking that every state only refers to tags the sample defines.
    pub fn build(self) -> Result<Vec<SampleState>, SampleError> {
        for state in &self.states {
            self.sample.validate(state)?;
        }
        Ok(self.states)
    }

    /// Finish the sequence and render every state.
    pub fn render(self) -> Result<Vec<RenderedSample>, SampleError> {
        let sample = self.sample;
        let states = self.build()?;
        Ok(states.iter().map(|s| sample.render(s)).collect())
    }
}
