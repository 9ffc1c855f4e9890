//! Core library for lede.
//!
//! Extractive summarization: a text is split into sentences, words are
//! weighted by their normalized frequency, and the highest scoring sentences
//! are returned verbatim in their original order.
//!
//! # Modules
//!
//! - [`text`] - Sentence segmentation and word normalization
//! - [`stopwords`] - Stop-word sets
//! - [`frequency`] - Word-importance model
//! - [`scoring`] - Sentence scoring and top-K selection
//! - [`summarize`] - The end-to-end [`Summarizer`]
//! - [`markdown`] - Markdown to prose
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use lede_core::Summarizer;
//!
//! let text = std::fs::read_to_string("article.txt").unwrap();
//! let report = Summarizer::english().summarize(&text, 3).unwrap();
//! println!("{}", report.summary);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod frequency;
pub mod markdown;
pub mod scoring;
pub mod stopwords;
pub mod summarize;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ErrorKind, SummarizeError, SummarizeResult};
pub use frequency::WordFrequencyTable;
pub use scoring::{ScoredSentence, ScoringWeights};
pub use stopwords::StopWordSet;
pub use summarize::{Keyword, SelectedSentence, Summarizer, SummaryReport, TextStats};
pub use text::Sentence;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
