use slidecode::sample::SampleError;
use slidecode::{PaletteError, UnknownLanguage};
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the demo binary.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// Reading an input file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The language could not be determined.
    #[error(transparent)]
    Language(#[from] UnknownLanguage),

    /// The palette file is invalid.
    #[error("palette: {0}")]
    Palette(#[from] PaletteError),

    /// The sample or its states are invalid.
    #[error("sample: {0}")]
    Sample(#[from] SampleError),

    /// A line of the step script is invalid.
    #[error("steps line {line}: {message}")]
    Step {
        /// 1-based line number.
        line: usize,
        /// What is wrong.
        message: String,
    },
}
