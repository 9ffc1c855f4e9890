//! Error types for lede-core.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while summarizing a text.
///
/// Every variant is scoped to a single request. None of them leave state
/// behind, so a caller can report the message and try again with other input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// The input text is empty or whitespace-only.
    #[error("input text is empty")]
    EmptyInput,

    /// Sentence segmentation found nothing in a non-empty input, e.g. punctuation only.
    #[error("no sentences found in the text")]
    NoSentences,

    /// Every word is a stop-word or strips to nothing.
    #[error("no valid words found after removing stop-words and punctuation")]
    NoValidWords,

    /// Every sentence is shorter than the scoring threshold.
    #[error("no sentence has at least {min_tokens} words; nothing to summarize")]
    NoScorableSentences {
        /// The minimum token count a sentence needs to be scored.
        min_tokens: usize,
    },

    /// The summary has zero words, so the compression ratio has no value.
    #[error("summary has no words; compression ratio is undefined")]
    UndefinedCompressionRatio,
}

impl SummarizeError {
    /// Returns the machine-readable kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::NoSentences => ErrorKind::NoSentences,
            Self::NoValidWords => ErrorKind::NoValidWords,
            Self::NoScorableSentences { .. } => ErrorKind::NoScorableSentences,
            Self::UndefinedCompressionRatio => ErrorKind::UndefinedCompressionRatio,
        }
    }
}

/// Stable identifiers for [`SummarizeError`] variants.
///
/// Serialized in snake case so JSON consumers can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`SummarizeError::EmptyInput`].
    EmptyInput,
    /// See [`SummarizeError::NoSentences`].
    NoSentences,
    /// See [`SummarizeError::NoValidWords`].
    NoValidWords,
    /// See [`SummarizeError::NoScorableSentences`].
    NoScorableSentences,
    /// See [`SummarizeError::UndefinedCompressionRatio`].
    UndefinedCompressionRatio,
}

impl ErrorKind {
    /// Returns the kind as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NoSentences => "no_sentences",
            Self::NoValidWords => "no_valid_words",
            Self::NoScorableSentences => "no_scorable_sentences",
            Self::UndefinedCompressionRatio => "undefined_compression_ratio",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias using [`SummarizeError`].
pub type SummarizeResult<T> = Result<T, SummarizeError>;
