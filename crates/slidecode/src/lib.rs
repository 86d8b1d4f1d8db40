#![warn(missing_docs)]
//! `slidecode` - headless code highlighting and walkthrough sequencing for slides.
//!
//! # Overview
//!
//! - [`highlight`] / [`Highlighter`]: turn a snippet of Gradle Kotlin/Groovy DSL, XML, YAML,
//!   TOML, HOCON or `.properties` text into a [`HighlightedText`]
//! - [`sample`]: strip `{{tag}}` markers from a sample and build the reveal/hide/focus states
//!   of a code walkthrough
//!
//! ```rust
//! use slidecode::{CodeScope, CodeStyle, Language, StyleCategory, highlight};
//!
//! let text = r#"val greeting = "hello $name""#;
//! let out = highlight(text, Language::KotlinDsl, &CodeStyle::darcula(), CodeScope::File, None);
//! assert_eq!(out.texts_of(StyleCategory::Property), vec!["name"]);
//!
//! let rebuilt: String = out.segments().iter().map(|s| s.text).collect();
//! assert_eq!(rebuilt, text);
//! ```

mod highlighter;
pub mod sample;

pub use highlighter::{Highlighter, highlight, matcher};
pub use slidecode_core::{
    CodeScope, CodeStyle, Color, HighlightedText, IdentifierStyle, Language, MatchOptions,
    Matcher, PaletteBase, PaletteError, Segment, SpanStyle, StyleCategory, StyledRange,
    UnknownLanguage,
};
