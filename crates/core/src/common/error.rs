//! Error definitions.
//!
//! Field extraction and mnemonic rendering are total and never fail; an
//! unknown encoding is reported through the `break` sentinel. Errors only
//! arise at the edges:
//! 1. **Word Parsing:** Input lines that are not 32 binary digits.
//! 2. **I/O:** Failures reading the source or writing the listing.
//! 3. **Configuration:** Malformed or inconsistent configuration JSON.

use thiserror::Error;

/// Error type for the listing pipeline and configuration loading.
#[derive(Error, Debug)]
pub enum DisasmError {
    /// An input line does not hold exactly 32 characters.
    #[error("line {line}: expected 32 binary digits, found {len} characters")]
    InvalidLength {
        /// 1-based input line number.
        line: usize,
        /// Number of characters found after trimming.
        len: usize,
    },

    /// An input line holds a character other than `0` or `1`.
    #[error("line {line}, column {column}: invalid binary digit {found:?}")]
    InvalidDigit {
        /// 1-based input line number.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The offending character.
        found: char,
    },

    /// A word given outside a listing (e.g. on the command line) is malformed.
    #[error("invalid word {text:?}: {reason}")]
    InvalidWord {
        /// The text as given.
        text: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Reading the source or writing the listing failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration JSON could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but holds inconsistent values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl DisasmError {
    /// Returns the input line number the error refers to, if any.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidLength { line, .. } | Self::InvalidDigit { line, .. } => Some(*line),
            Self::InvalidWord { .. } | Self::Io(_) | Self::Config(_) | Self::InvalidConfig(_) => None,
        }
    }
}
