#![warn(missing_docs)]
//! `slidecode-core` - shared highlighting model for `slidecode`.
//!
//! # Overview
//!
//! Every matcher in the workspace turns text into `(range, category)` pairs. This crate holds
//! the pieces they share:
//!
//! - [`StyleCategory`] / [`CodeStyle`]: semantic categories and the palette mapping them to
//!   visual [`SpanStyle`]s (loadable from YAML)
//! - [`StyleApplier`]: collects ranges from ordered passes, enforcing first-claim-wins through a
//!   [`ClaimSet`](intervals::ClaimSet)
//! - [`HighlightedText`]: the final annotated text, iterable as [`Segment`]s
//! - [`Matcher`]: the trait each language implements
//!
//! ```rust
//! use slidecode_core::{CodeStyle, HighlightedText, StyleApplier, StyleCategory};
//!
//! let text = "answer = 42";
//! let mut applier = StyleApplier::new(text);
//! applier.claim(0..6, StyleCategory::Keyword);
//! applier.claim(9..11, StyleCategory::Number);
//!
//! let highlighted = HighlightedText::new(text, applier.finish(), CodeStyle::darcula());
//! let joined: String = highlighted.segments().iter().map(|s| s.text).collect();
//! assert_eq!(joined, text);
//! ```

pub mod intervals;

mod applier;
mod matcher;
mod style;
mod text;

pub use applier::StyleApplier;
pub use matcher::{IdentifierStyle, MatchOptions, Matcher};
pub use slidecode_lang::{CodeScope, CommentConfig, Language, UnknownLanguage};
pub use style::{CodeStyle, Color, PaletteBase, PaletteError, SpanStyle, StyleCategory};
pub use text::{HighlightedText, Segment, StyledRange};
