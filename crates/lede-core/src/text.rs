//! Sentence segmentation and word normalization.
//!
//! Sentences keep a byte span into the source text and an ordinal assigned at
//! segmentation time, so a selected sentence always maps back to its position
//! in the document. Words are normalized for frequency analysis: lower-cased,
//! with every non-alphanumeric character removed.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)*[A-Z]$").expect("valid regex"));

/// A sentence of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence<'a> {
    /// Position among the segmented sentences, starting at 0.
    pub ordinal: usize,
    /// Byte range of the trimmed sentence within the source text.
    pub span: Range<usize>,
    /// The sentence as it appears in the source, trimmed.
    pub text: &'a str,
}

impl Sentence<'_> {
    /// Normalized word tokens of this sentence.
    pub fn words(&self) -> Vec<String> {
        normalize_words(self.text)
    }
}

/// Split text into sentences.
///
/// Scans for `.`, `!` and `?` and decides at each one whether it ends a
/// sentence. Periods after abbreviations and initials, inside numbers, URLs
/// and file names, or followed by a lower-case word do not. Closing quotes
/// and brackets right after a terminator stay with the sentence they close.
/// A blank line always ends a sentence, so headings and list items without
/// terminators stand on their own. Fragments without any alphanumeric
/// character are dropped.
///
/// Known limitation: an abbreviation that really does end a sentence
/// ("... at 5 p.m. Then ...") is not split.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    if text.trim().is_empty() {
        return sentences;
    }

    let (offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
    let byte_at = |i: usize| offsets.get(i).copied().unwrap_or(text.len());

    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\n'
            && let Some(end) = paragraph_break_end(&chars, i)
        {
            push_sentence(text, start..byte_at(i), &mut sentences);
            start = byte_at(end);
            i = end;
            continue;
        }

        if is_sentence_terminator(chars[i]) {
            let context = BoundaryContext::at(&chars, i);
            let fragment = &text[start..byte_at(i + 1)];

            if context.is_boundary(fragment) {
                let mut end = i + 1;
                while end < chars.len()
                    && (is_sentence_terminator(chars[end]) || is_closing(chars[end]))
                {
                    end += 1;
                }
                push_sentence(text, start..byte_at(end), &mut sentences);
                start = byte_at(end);
                i = end;
                continue;
            }
        }
        i += 1;
    }

    push_sentence(text, start..text.len(), &mut sentences);
    tracing::debug!(count = sentences.len(), "segmented sentences");
    sentences
}

/// Normalize text into lower-case word tokens.
///
/// Splits on whitespace and dashes used as separators, removes every
/// non-alphanumeric character from each token, and drops tokens left empty.
/// `"Don't stop—ever!"` becomes `["dont", "stop", "ever"]`.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || matches!(c, '\u{2014}' | '\u{2013}'))
        .filter_map(normalize_token)
        .collect()
}

/// Normalize a single token, returning `None` if nothing alphanumeric remains.
pub fn normalize_token(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Count normalized words.
pub fn count_words(text: &str) -> usize {
    normalize_words(text).len()
}

fn push_sentence<'a>(text: &'a str, range: Range<usize>, out: &mut Vec<Sentence<'a>>) {
    let raw = &text[range.clone()];
    let trimmed = raw.trim();
    if !trimmed.chars().any(char::is_alphanumeric) {
        return;
    }
    let begin = range.start + (raw.len() - raw.trim_start().len());
    out.push(Sentence {
        ordinal: out.len(),
        span: begin..begin + trimmed.len(),
        text: trimmed,
    });
}

/// If the newline at `pos` starts a blank-line run, the index just past it.
fn paragraph_break_end(chars: &[char], pos: usize) -> Option<usize> {
    let mut end = pos + 1;
    let mut newlines = 1;
    while end < chars.len() && chars[end].is_whitespace() {
        if chars[end] == '\n' {
            newlines += 1;
        }
        end += 1;
    }
    (newlines > 1).then_some(end)
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// What surrounds a terminator.
struct BoundaryContext {
    punctuation: char,
    word_before: String,
    /// The character directly after the terminator.
    adjacent: Option<char>,
    /// First non-whitespace character after the terminator.
    next: Option<char>,
    /// The character following `next`.
    after_next: Option<char>,
    at_end: bool,
}

impl BoundaryContext {
    fn at(chars: &[char], pos: usize) -> Self {
        let mut next_pos = pos + 1;
        while next_pos < chars.len() && chars[next_pos].is_whitespace() {
            next_pos += 1;
        }

        Self {
            punctuation: chars[pos],
            word_before: word_before(chars, pos),
            adjacent: chars.get(pos + 1).copied(),
            next: chars.get(next_pos).copied(),
            after_next: chars.get(next_pos + 1).copied(),
            at_end: next_pos >= chars.len(),
        }
    }

    fn is_boundary(&self, fragment: &str) -> bool {
        if self.at_end {
            return true;
        }

        // Let the last of a run of terminators decide ("?!", "...").
        if self.adjacent.is_some_and(is_sentence_terminator) {
            return false;
        }

        if self.punctuation != '.' {
            return !self.next_word_is_lowercase();
        }

        // "3.14", "example.com", "main.rs", "e.g"
        if self.adjacent.is_some_and(char::is_alphanumeric) {
            return false;
        }

        if fragment.ends_with("...") {
            return false;
        }

        if is_abbreviation(&self.word_before) || is_initial(&self.word_before) {
            return false;
        }

        !self.next_word_is_lowercase()
    }

    fn next_word_is_lowercase(&self) -> bool {
        match self.next {
            Some(c) if is_closing(c) || c == '\u{201c}' || c == '\u{2018}' => {
                self.after_next.is_some_and(char::is_lowercase)
            }
            Some(c) => c.is_lowercase(),
            None => false,
        }
    }
}

/// The word directly before `pos`, including inner periods ("e.g", "U.S").
fn word_before(chars: &[char], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .take_while(|c| c.is_alphanumeric() || **c == '.')
        .copied()
        .collect();
    word.reverse();
    let word: String = word.into_iter().collect();
    word.trim_matches('.').to_string()
}

fn is_initial(word: &str) -> bool {
    INITIALS_PATTERN.is_match(word)
}
