// Keyword extraction for paper titles and abstracts.
//
// Text is normalized to lowercase ASCII words, filtered against the stop-word
// table, abbreviation-expanded, and then emitted as unigrams, every adjacent
// bigram, and those adjacent trigrams that look biomedical.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::vocab::{ABBREVIATIONS, BIOMEDICAL_MARKERS, STOP_WORDS};

/// Anything that is not a word character, whitespace or a hyphen.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid disallowed-character regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Tokens shorter than this are dropped before expansion.
pub const MIN_TOKEN_LEN: usize = 3;

/// Extract the keyword set of one text field.
///
/// The result is deduplicated, keeping the first occurrence: unigrams in text
/// order, then bigrams, then biomedical trigrams. Empty text yields nothing.
///
/// Because duplicates are removed here, a term-frequency vector built from
/// the result never counts a term more than once. Scoring downstream keeps
/// that behavior, which makes cosine similarity behave like a set overlap.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let tokens = significant_tokens(text);

    let mut ngrams: Vec<String> = tokens.clone();

    for pair in tokens.windows(2) {
        ngrams.push(format!("{} {}", pair[0], pair[1]));
    }

    for triple in tokens.windows(3) {
        let trigram = format!("{} {} {}", triple[0], triple[1], triple[2]);
        if is_biomedical_term(&trigram) {
            ngrams.push(trigram);
        }
    }

    let mut seen = HashSet::with_capacity(ngrams.len());
    let keywords: Vec<String> = ngrams
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect();

    debug!(
        keywords = keywords.len(),
        sample = ?&keywords[..keywords.len().min(10)],
        "Extracted keywords"
    );

    keywords
}

/// Whether a phrase contains any biomedical marker (case-insensitive).
pub fn is_biomedical_term(term: &str) -> bool {
    let lower = term.to_lowercase();
    BIOMEDICAL_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Normalize text and return the surviving tokens, abbreviations expanded.
///
/// An expansion replaces the token's value as a whole. It is not split back
/// into words, so "dna" becomes the single token "deoxyribonucleic acid".
fn significant_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&stripped, " ");

    cleaned
        .trim()
        .split(' ')
        .filter(|word| is_significant(word))
        .map(|word| match ABBREVIATIONS.get(word) {
            Some(expansion) => (*expansion).to_string(),
            None => word.to_string(),
        })
        .collect()
}

fn is_significant(word: &str) -> bool {
    word.len() >= MIN_TOKEN_LEN
        && !STOP_WORDS.contains(word)
        && !word.bytes().all(|b| b.is_ascii_digit())
}
