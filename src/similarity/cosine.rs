// Cosine similarity over keyword term-frequency vectors.
//
// Each text field becomes a term -> count map. Two maps are compared over
// the union of their vocabularies:
//
//   cos = dot(a, b) / (|a| * |b|)
//
// An empty side has zero magnitude and scores exactly 0.0.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::keywords::extract_keywords;
use super::weights::SimilarityWeights;
use crate::models::{Paper, SimilarityScore};

/// Term -> occurrence count for one keyword list.
pub type TermFrequencies = HashMap<String, u32>;

/// Count how many times each term occurs in a keyword list.
///
/// Keyword lists from `extract_keywords` are already deduplicated, so every
/// count is 1 there. Counting is kept general so callers passing raw token
/// lists get true term frequencies.
pub fn term_frequencies<S: AsRef<str>>(terms: &[S]) -> TermFrequencies {
    let mut tf = TermFrequencies::new();
    for term in terms {
        *tf.entry(term.as_ref().to_string()).or_insert(0) += 1;
    }
    tf
}

/// Cosine similarity between two keyword lists.
///
/// Returns a value in [0.0, 1.0], up to floating-point rounding (identical
/// lists can land a ulp above 1.0). Returns 0.0 (never NaN) when either list
/// is empty.
pub fn cosine_similarity<S: AsRef<str>>(terms_a: &[S], terms_b: &[S]) -> f64 {
    let tf_a = term_frequencies(terms_a);
    let tf_b = term_frequencies(terms_b);
    cosine_from_frequencies(&tf_a, &tf_b)
}

/// Cosine similarity between two prebuilt term-frequency vectors.
pub fn cosine_from_frequencies(tf_a: &TermFrequencies, tf_b: &TermFrequencies) -> f64 {
    let vocabulary: HashSet<&String> = tf_a.keys().chain(tf_b.keys()).collect();

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for term in vocabulary {
        let a = f64::from(tf_a.get(term).copied().unwrap_or(0));
        let b = f64::from(tf_b.get(term).copied().unwrap_or(0));
        dot += a * b;
        mag_a += a * a;
        mag_b += b * b;
    }

    let denominator = mag_a.sqrt() * mag_b.sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

/// Compare two papers with the default weights.
///
/// The result carries `candidate`'s identifier.
pub fn calculate_similarity(target: &Paper, candidate: &Paper) -> SimilarityScore {
    calculate_similarity_with(target, candidate, &SimilarityWeights::default())
}

/// Compare two papers field by field and combine the field scores.
pub fn calculate_similarity_with(
    target: &Paper,
    candidate: &Paper,
    weights: &SimilarityWeights,
) -> SimilarityScore {
    let title_a = extract_keywords(target.title_text());
    let title_b = extract_keywords(candidate.title_text());
    let abstract_a = extract_keywords(target.abstract_str());
    let abstract_b = extract_keywords(candidate.abstract_str());

    let title_similarity = cosine_similarity(&title_a, &title_b);
    let abstract_similarity = cosine_similarity(&abstract_a, &abstract_b);
    let score = weights.combine(title_similarity, abstract_similarity);

    let matching_keywords = matching_keywords(
        title_a.iter().chain(abstract_a.iter()),
        title_b.iter().chain(abstract_b.iter()),
        weights.max_matching_keywords,
    );

    debug!(
        target = %target.pmid,
        candidate = %candidate.pmid,
        title_similarity,
        abstract_similarity,
        score,
        matching = matching_keywords.len(),
        "Compared papers"
    );

    SimilarityScore {
        pmid: candidate.pmid.clone(),
        score,
        matching_keywords,
        title_similarity,
        abstract_similarity,
    }
}

/// Keywords of `target` that also appear in `candidate`, in the target's
/// first-occurrence order, deduplicated and capped at `limit`.
fn matching_keywords<'a>(
    target: impl Iterator<Item = &'a String>,
    candidate: impl Iterator<Item = &'a String>,
    limit: usize,
) -> Vec<String> {
    let candidate: HashSet<&String> = candidate.collect();
    let mut seen = HashSet::new();

    target
        .filter(|kw| candidate.contains(kw) && seen.insert(*kw))
        .take(limit)
        .cloned()
        .collect()
}
