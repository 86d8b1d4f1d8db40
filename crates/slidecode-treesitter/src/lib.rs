#![warn(missing_docs)]
//! `slidecode-treesitter` - Tree-sitter integration for `slidecode`.
//!
//! XML is highlighted from a real parse tree rather than regexes, so tag names, attributes,
//! entity references and CDATA sections are told apart structurally. The output is plain
//! claims on a [`StyleApplier`](slidecode_core::StyleApplier), so it composes with the rest of
//! the workspace like any other [`Matcher`](slidecode_core::Matcher).

mod xml;

pub use xml::{XmlError, XmlMatcher};
