//! Sentence scoring and top-K selection.
//!
//! A sentence's score blends its word-importance density with a positional
//! bonus:
//!
//! `score = (importance_sum / token_count) * density_weight + positional * position_weight`
//!
//! where the positional bonus favours the lead sentence, then the closing
//! one. Sentences below a minimum token count are never scored.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SummarizeError, SummarizeResult};
use crate::frequency::WordFrequencyTable;
use crate::text::Sentence;

/// Tunable scoring heuristics.
///
/// The defaults are the historical values and have no derivation beyond
/// having worked well on prose; change them with care.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringWeights {
    /// Sentences with fewer normalized tokens than this are skipped.
    pub min_sentence_tokens: usize,
    /// Positional bonus of the first sentence.
    pub first_position: f64,
    /// Positional bonus of the last sentence.
    pub last_position: f64,
    /// Positional bonus of every other sentence.
    pub middle_position: f64,
    /// Share of the score taken by word-importance density.
    pub density_weight: f64,
    /// Share of the score taken by the positional bonus.
    pub position_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            min_sentence_tokens: 30,
            first_position: 0.5,
            last_position: 0.3,
            middle_position: 0.2,
            density_weight: 0.7,
            position_weight: 0.3,
        }
    }
}

impl ScoringWeights {
    /// Positional bonus of the sentence at `ordinal` out of `total`.
    ///
    /// The first sentence wins over the last when they are the same one.
    pub fn positional(&self, ordinal: usize, total: usize) -> f64 {
        if ordinal == 0 {
            self.first_position
        } else if ordinal + 1 == total {
            self.last_position
        } else {
            self.middle_position
        }
    }
}

/// A sentence that passed the length filter, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// Ordinal of the sentence in the document.
    pub ordinal: usize,
    /// Combined score.
    pub score: f64,
    /// Normalized token count of the sentence.
    pub tokens: usize,
}

impl Eq for ScoredSentence {}

impl PartialOrd for ScoredSentence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredSentence {
    /// Higher score ranks greater; on equal scores the earlier sentence does.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.score.total_cmp(&other.score) {
            Ordering::Equal => other.ordinal.cmp(&self.ordinal),
            ord => ord,
        }
    }
}

/// Score every sentence long enough to qualify.
///
/// # Errors
///
/// Returns [`SummarizeError::NoScorableSentences`] if no sentence reaches
/// [`ScoringWeights::min_sentence_tokens`].
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn score_sentences(
    sentences: &[Sentence<'_>],
    table: &WordFrequencyTable,
    weights: &ScoringWeights,
) -> SummarizeResult<Vec<ScoredSentence>> {
    let total = sentences.len();
    let scored: Vec<ScoredSentence> = sentences
        .iter()
        .filter_map(|sentence| {
            let words = sentence.words();
            let tokens = words.len();
            if tokens < weights.min_sentence_tokens || tokens == 0 {
                return None;
            }
            let importance: f64 = words.iter().map(|w| table.weight(w)).sum();
            let density = importance / tokens as f64;
            let positional = weights.positional(sentence.ordinal, total);
            Some(ScoredSentence {
                ordinal: sentence.ordinal,
                score: density.mul_add(
                    weights.density_weight,
                    positional * weights.position_weight,
                ),
                tokens,
            })
        })
        .collect();

    if scored.is_empty() {
        return Err(SummarizeError::NoScorableSentences {
            min_tokens: weights.min_sentence_tokens,
        });
    }

    tracing::debug!(scored = scored.len(), skipped = total - scored.len(), "scored sentences");
    Ok(scored)
}

/// Select the `k` best sentences and return them in document order.
///
/// Keeps a min-heap of at most `k` entries, so the cost is `O(n log k)`.
/// Ties go to the earlier sentence.
pub fn select_top(scored: &[ScoredSentence], k: usize) -> Vec<ScoredSentence> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<ScoredSentence>> = BinaryHeap::with_capacity(k + 1);
    for candidate in scored {
        heap.push(Reverse(*candidate));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut selected: Vec<ScoredSentence> = heap.into_iter().map(|Reverse(s)| s).collect();
    selected.sort_unstable_by_key(|s| s.ordinal);
    selected
}
