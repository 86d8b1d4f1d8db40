use thiserror::Error;

/// Errors produced while parsing a tagged sample or validating its states.
///
/// Line numbers are 1-based and refer to the source text, markers included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A tag was opened but never closed.
    #[error("line {line}: tag `{tag}` is never closed")]
    Unclosed {
        /// The open tag.
        tag: String,
        /// Line of the opening marker.
        line: usize,
    },

    /// A closing marker without any open tag.
    #[error("line {line}: closing marker for `{tag}` without an open tag")]
    UnexpectedClose {
        /// The closed tag.
        tag: String,
        /// Line of the closing marker.
        line: usize,
    },

    /// A closing marker that doesn't close the innermost open tag.
    #[error("line {line}: closing marker for `{found}` while `{expected}` is open")]
    Mismatched {
        /// The innermost open tag.
        expected: String,
        /// The tag the marker closes.
        found: String,
        /// Line of the closing marker.
        line: usize,
    },

    /// A marker without a name, e.g. `{{}}`.
    #[error("line {line}: empty tag name")]
    EmptyTagName {
        /// Line of the marker.
        line: usize,
    },

    /// Marker delimiters that can't be used.
    #[error("invalid tag syntax: {0}")]
    InvalidSyntax(&'static str),

    /// A state refers to a tag the sample doesn't define.
    #[error("unknown tag `{0}`")]
    UnknownTag(String),
}
