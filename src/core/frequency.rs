//! Word frequency counting.
//!
//! Three views over the same message list:
//!
//! | Function | Used for | Filtering |
//! |----------|----------|-----------|
//! | [`top_words`] / [`word_frequencies`] | the frequency table | stop-words, tokens ≤ 2 chars |
//! | [`naive_frequencies`] | frequency-weighted cloud | none, whitespace split |
//! | [`process_text`] | text-density cloud | stop-words, digits, `'s`, plurals |
//!
//! All counts are accumulated in first-encounter order and ranked with a
//! stable sort, so ties always come out in the order the words first appeared.
//!
//! # Example
//!
//! ```
//! use wordstorm::core::frequency::word_frequencies;
//!
//! let table = word_frequencies(&["hi hi hi hello".to_string()]);
//! assert_eq!(table.len(), 1);
//! assert_eq!(table[0].word, "hello");
//! assert_eq!(table[0].count, 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stopwords::{is_stopword, stopwords};
use crate::config::DEFAULT_TOP_N;

/// Tokens for the frequency table. Unicode `\w` keeps combining marks inside a token.
static TABLE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("table token pattern is valid"));

/// Tokens for cloud text processing; keeps inner apostrophes.
static CLOUD_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("cloud token pattern is valid"));

/// Minimum token length (in characters) kept in the frequency table.
pub const MIN_TOKEN_CHARS: usize = 3;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The lowercase token
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

impl WordCount {
    /// Creates a new word count.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, usize)> for WordCount {
    fn from((word, count): (String, usize)) -> Self {
        Self { word, count }
    }
}

/// Counts items while remembering the order they were first seen in.
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    counts: Vec<WordCount>,
}

impl OrderedCounter {
    fn add(&mut self, word: &str) {
        if let Some(&i) = self.index.get(word) {
            self.counts[i].count += 1;
        } else {
            self.index.insert(word.to_string(), self.counts.len());
            self.counts.push(WordCount::new(word, 1));
        }
    }

    fn into_counts(self) -> Vec<WordCount> {
        self.counts
    }
}

/// Joins messages with single spaces and lowercases the result.
fn joined_lowercase<S: AsRef<str>>(messages: &[S]) -> String {
    messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Sorts counts by descending count, keeping encounter order for ties.
pub fn rank(mut counts: Vec<WordCount>) -> Vec<WordCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Returns the `n` most frequent qualifying tokens across all messages.
///
/// A token qualifies when it has at least [`MIN_TOKEN_CHARS`] characters and
/// is not a stop-word.
pub fn top_words<S: AsRef<str>>(messages: &[S], n: usize) -> Vec<WordCount> {
    let text = joined_lowercase(messages);
    let mut counter = OrderedCounter::default();

    for token in TABLE_TOKEN_RE.find_iter(&text).map(|m| m.as_str()) {
        if token.chars().count() >= MIN_TOKEN_CHARS && !is_stopword(token) {
            counter.add(token);
        }
    }

    let mut ranked = rank(counter.into_counts());
    ranked.truncate(n);
    ranked
}

/// Returns the top-20 frequency table.
pub fn word_frequencies<S: AsRef<str>>(messages: &[S]) -> Vec<WordCount> {
    top_words(messages, DEFAULT_TOP_N)
}

/// Counts whitespace-separated chunks of the lowercased text, unfiltered.
///
/// Punctuation stays attached and stop-words are kept.
pub fn naive_frequencies<S: AsRef<str>>(messages: &[S]) -> Vec<WordCount> {
    let text = joined_lowercase(messages);
    let mut counter = OrderedCounter::default();
    for chunk in text.split_whitespace() {
        counter.add(chunk);
    }
    counter.into_counts()
}

/// Turns running text into cloud weights.
///
/// Steps: tokenize with `\w[\w']+`, drop a trailing `'s`, drop all-digit
/// tokens and stop-words, count, then fold a plural `xs` into `x` when `x`
/// was also seen.
///
/// Only single words are weighted. Bigram collocations such as
/// "good morning" are not formed, so each word of a phrase is counted on its
/// own.
pub fn process_text(text: &str) -> Vec<WordCount> {
    process_text_with(text, stopwords())
}

/// Like [`process_text`], with a caller-supplied stop-word set.
pub fn process_text_with(text: &str, stop: &HashSet<&str>) -> Vec<WordCount> {
    let mut counter = OrderedCounter::default();

    for token in CLOUD_TOKEN_RE.find_iter(text).map(|m| m.as_str()) {
        let word = token
            .strip_suffix("'s")
            .or_else(|| token.strip_suffix("'S"))
            .unwrap_or(token);
        if word.is_empty() || word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if stop.contains(word.to_lowercase().as_str()) {
            continue;
        }
        counter.add(word);
    }

    merge_plurals(counter)
}

fn merge_plurals(counter: OrderedCounter) -> Vec<WordCount> {
    let OrderedCounter { index, mut counts } = counter;
    let mut removed = vec![false; counts.len()];

    for i in 0..counts.len() {
        let word = &counts[i].word;
        if !word.ends_with('s') || word.ends_with("ss") {
            continue;
        }
        let singular = &word[..word.len() - 1];
        if let Some(&j) = index.get(singular) {
            let plural_count = counts[i].count;
            counts[j].count += plural_count;
            removed[i] = true;
        }
    }

    counts
        .into_iter()
        .zip(removed)
        .filter_map(|(wc, gone)| (!gone).then_some(wc))
        .collect()
}

/// Builds the weights handed to the cloud renderer.
///
/// With `use_freq` the naive whitespace counts are used as-is; otherwise the
/// joined lowercase text goes through [`process_text`].
pub fn cloud_frequencies<S: AsRef<str>>(messages: &[S], use_freq: bool) -> Vec<WordCount> {
    cloud_frequencies_with(messages, use_freq, stopwords())
}

/// Like [`cloud_frequencies`], with a caller-supplied stop-word set for the
/// processed-text mode.
pub fn cloud_frequencies_with<S: AsRef<str>>(
    messages: &[S],
    use_freq: bool,
    stop: &HashSet<&str>,
) -> Vec<WordCount> {
    if use_freq {
        naive_frequencies(messages)
    } else {
        process_text_with(&joined_lowercase(messages), stop)
    }
}
