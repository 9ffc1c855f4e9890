//! Word-importance model.

use std::collections::BTreeMap;

use crate::error::{SummarizeError, SummarizeResult};
use crate::stopwords::StopWordSet;

/// Normalized frequency of every non-stop-word in a document.
///
/// Weights are in `[0, 1]`; the most frequent word weighs exactly `1.0`.
/// Iteration is in sorted word order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequencyTable {
    weights: BTreeMap<String, f64>,
}

impl WordFrequencyTable {
    /// Build the table from the normalized words of a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::NoValidWords`] if every word is a stop-word.
    #[tracing::instrument(skip_all, fields(words = words.len()))]
    pub fn build<S: AsRef<str>>(words: &[S], stop_words: &StopWordSet) -> SummarizeResult<Self> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            if !stop_words.contains(word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let max_count = counts.values().copied().max().ok_or(SummarizeError::NoValidWords)?;
        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max_count as f64))
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(distinct = weights.len(), max_count, "built frequency table");
        Ok(Self { weights })
    }

    /// Weight of a word, or `0.0` if the word is absent.
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// Number of distinct words.
    pub(crate) fn len(&self) -> usize {
        self.weights.len()
    }

    /// Words and weights in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, v)| (w.as_str(), *v))
    }

    /// The `n` heaviest words, ties broken alphabetically.
    pub fn top_words(&self, n: usize) -> Vec<(&str, f64)> {
        let mut words: Vec<_> = self.iter().collect();
        words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize_words;

    fn table(text: &str) -> SummarizeResult<WordFrequencyTable> {
        WordFrequencyTable::build(&normalize_words(text), &StopWordSet::english())
    }

    #[test]
    fn most_frequent_word_weighs_one() {
        let t = table("Rust rust RUST compiler compiler borrow").unwrap();
        assert_eq!(t.weight("rust"), 1.0);
        assert!((t.weight("compiler") - 2.0 / 3.0).abs() < 1e-12);
        assert!((t.weight("borrow") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn weights_stay_in_unit_range() {
        let t = table("alpha beta beta gamma gamma gamma delta").unwrap();
        assert!(t.iter().all(|(_, w)| (0.0..=1.0).contains(&w)));
        assert_eq!(t.iter().filter(|(_, w)| *w == 1.0).count(), 1);
    }

    #[test]
    fn stop_words_are_excluded() {
        let t = table("The cat and the hat").unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.weight("the"), 0.0);
    }

    #[test]
    fn only_stop_words_is_an_error() {
        assert_eq!(table("the a an the"), Err(SummarizeError::NoValidWords));
        assert_eq!(table(""), Err(SummarizeError::NoValidWords));
    }

    #[test]
    fn iteration_is_sorted() {
        let t = table("zebra apple mango").unwrap();
        let words: Vec<_> = t.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn top_words_ties_alphabetical() {
        let t = table("beta alpha beta alpha gamma").unwrap();
        let top: Vec<_> = t.top_words(2).into_iter().map(|(w, _)| w).collect();
        assert_eq!(top, vec!["alpha", "beta"]);
    }
}
