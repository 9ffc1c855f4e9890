//! Extractive summarization.
//!
//! [`Summarizer`] ties the pipeline together: segment the text, build the
//! word-importance model, score sentences, keep the best `k` in document
//! order and report statistics for the input and the summary.
//!
//! A summarizer holds only read-only state (the stop-word set and the scoring
//! weights). Each call works on its own locals, so one instance can serve
//! any number of requests, concurrently or not.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SummarizeError, SummarizeResult};
use crate::frequency::WordFrequencyTable;
use crate::scoring::{self, ScoringWeights};
use crate::stopwords::StopWordSet;
use crate::text::{self, Sentence};

/// Smallest accepted summary length, in sentences.
pub const MIN_SUMMARY_LENGTH: usize = 1;

/// Largest accepted summary length, in sentences.
pub const MAX_SUMMARY_LENGTH: usize = 20;

/// Summary length used when the caller has no preference.
pub const DEFAULT_SUMMARY_LENGTH: usize = 5;

/// Number of keywords reported alongside a summary.
const KEYWORD_COUNT: usize = 10;

/// Character, word and sentence counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Unicode scalar values in the trimmed text.
    pub chars: usize,
    /// Normalized words.
    pub words: usize,
    /// Sentences found by segmentation.
    pub sentences: usize,
}

impl TextStats {
    /// Compute statistics for a text.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn of(text: &str) -> Self {
        let text = text.trim();
        let sentences = text::split_sentences(text);
        Self {
            chars: text.chars().count(),
            words: sentences.iter().map(|s| s.words().len()).sum(),
            sentences: sentences.len(),
        }
    }
}

/// A sentence chosen for the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SelectedSentence {
    /// Position of the sentence in the input, starting at 0.
    pub ordinal: usize,
    /// Score the sentence was selected with.
    pub score: f64,
    /// The sentence as written in the input.
    pub text: String,
}

/// A heavily weighted word of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Keyword {
    /// Normalized word.
    pub word: String,
    /// Weight in `[0, 1]`.
    pub weight: f64,
}

/// Result of summarizing a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryReport {
    /// Selected sentences joined by single spaces, in document order.
    pub summary: String,
    /// Selected sentences in document order.
    pub sentences: Vec<SelectedSentence>,
    /// The most heavily weighted words of the input.
    pub keywords: Vec<Keyword>,
    /// Statistics of the input.
    pub input_stats: TextStats,
    /// Statistics of the summary.
    pub summary_stats: TextStats,
    /// Input words per summary word.
    pub compression_ratio: f64,
    /// Summary length after clamping.
    pub requested_length: usize,
    /// Sentences long enough to be considered.
    pub scorable_sentences: usize,
}

/// Extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stop_words: Arc<StopWordSet>,
    weights: ScoringWeights,
}

impl Summarizer {
    /// Create a summarizer from a shared stop-word set and scoring weights.
    pub fn new(stop_words: Arc<StopWordSet>, weights: ScoringWeights) -> Self {
        Self {
            stop_words,
            weights,
        }
    }

    /// A summarizer with the built-in English stop-words and default weights.
    pub fn english() -> Self {
        Self::new(Arc::new(StopWordSet::english()), ScoringWeights::default())
    }

    /// The scoring weights in use.
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// The stop-word set in use.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Summarize `text` in at most `summary_length` sentences.
    ///
    /// `summary_length` is clamped into
    /// [`MIN_SUMMARY_LENGTH`]`..=`[`MAX_SUMMARY_LENGTH`]. Fewer sentences are
    /// returned when fewer qualify.
    ///
    /// # Errors
    ///
    /// - [`SummarizeError::EmptyInput`] for empty or whitespace-only text
    /// - [`SummarizeError::NoSentences`] when segmentation finds nothing
    /// - [`SummarizeError::NoValidWords`] when every word is a stop-word
    /// - [`SummarizeError::NoScorableSentences`] when every sentence is too short
    /// - [`SummarizeError::UndefinedCompressionRatio`] when the summary has no words
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn summarize(&self, text: &str, summary_length: usize) -> SummarizeResult<SummaryReport> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        let requested_length = clamp_length(summary_length);

        let sentences = text::split_sentences(text);
        if sentences.is_empty() {
            return Err(SummarizeError::NoSentences);
        }

        // Same tokens the scorer sees, so every sentence word has its weight.
        let words: Vec<String> = sentences.iter().flat_map(Sentence::words).collect();
        let table = WordFrequencyTable::build(&words, &self.stop_words)?;
        let scored = scoring::score_sentences(&sentences, &table, &self.weights)?;
        let selected = scoring::select_top(&scored, requested_length);

        let sentences_out: Vec<SelectedSentence> = selected
            .iter()
            .map(|s| SelectedSentence {
                ordinal: s.ordinal,
                score: s.score,
                text: sentences[s.ordinal].text.to_string(),
            })
            .collect();
        let summary = sentences_out
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let input_stats = TextStats {
            chars: text.chars().count(),
            words: words.len(),
            sentences: sentences.len(),
        };
        let summary_stats = TextStats {
            chars: summary.chars().count(),
            words: text::count_words(&summary),
            sentences: sentences_out.len(),
        };
        let ratio = compression_ratio(input_stats.words, summary_stats.words)?;

        let keywords = table
            .top_words(KEYWORD_COUNT)
            .into_iter()
            .map(|(word, weight)| Keyword {
                word: word.to_string(),
                weight,
            })
            .collect();

        tracing::info!(
            requested_length,
            distinct_words = table.len(),
            selected = sentences_out.len(),
            input_words = input_stats.words,
            summary_words = summary_stats.words,
            compression_ratio = ratio,
            "summary generated"
        );

        Ok(SummaryReport {
            summary,
            sentences: sentences_out,
            keywords,
            input_stats,
            summary_stats,
            compression_ratio: ratio,
            requested_length,
            scorable_sentences: scored.len(),
        })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::english()
    }
}

/// Clamp a requested summary length into the accepted range.
pub fn clamp_length(summary_length: usize) -> usize {
    summary_length.clamp(MIN_SUMMARY_LENGTH, MAX_SUMMARY_LENGTH)
}

/// Input words per summary word.
///
/// # Errors
///
/// Returns [`SummarizeError::UndefinedCompressionRatio`] if `summary_words`
/// is zero.
pub fn compression_ratio(input_words: usize, summary_words: usize) -> SummarizeResult<f64> {
    if summary_words == 0 {
        return Err(SummarizeError::UndefinedCompressionRatio);
    }
    Ok(input_words as f64 / summary_words as f64)
}
