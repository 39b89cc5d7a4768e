//! Word list analysis command
//!
//! Letter and n-gram frequencies of a word list, optionally restricted to one
//! word length.

use crate::solver::{build_letter_histogram, build_ngram_histogram, build_priority_queue, filter_by_length};

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow<K> {
    pub key: K,
    pub count: usize,
    /// Share of all counted occurrences
    pub frequency: f64,
}

/// Result of analyzing a word list
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub length: Option<usize>,
    pub pool_size: usize,
    pub total_letters: usize,
    /// Letters in guessing order
    pub letters: Vec<FrequencyRow<char>>,
    pub n: usize,
    /// N-grams in descending count
    pub ngrams: Vec<FrequencyRow<String>>,
}

/// Analyze `words`, or only those of `length` characters when given
///
/// `n` selects the n-gram size for the second table.
#[must_use]
pub fn analyze_words(words: &[String], length: Option<usize>, n: usize) -> AnalysisResult {
    let pool: Vec<&str> = match length {
        Some(length) => filter_by_length(words, length),
        None => words.iter().map(String::as_str).collect(),
    };

    let letters = build_letter_histogram(&pool);
    let letter_freq = letters.frequencies();
    let letter_rows = build_priority_queue(&letters)
        .into_iter()
        .map(|key| FrequencyRow {
            count: letters.get(&key),
            frequency: letter_freq.get(&key).copied().unwrap_or(0.0),
            key,
        })
        .collect();

    let ngrams = build_ngram_histogram(&pool, n);
    let ngram_freq = ngrams.frequencies();
    let ngram_rows = build_priority_queue(&ngrams)
        .into_iter()
        .map(|key| FrequencyRow {
            count: ngrams.get(&key),
            frequency: ngram_freq.get(&key).copied().unwrap_or(0.0),
            key,
        })
        .collect();

    AnalysisResult {
        length,
        pool_size: pool.len(),
        total_letters: letters.total(),
        letters: letter_rows,
        n,
        ngrams: ngram_rows,
    }
}
