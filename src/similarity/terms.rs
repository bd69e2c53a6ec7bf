// Corpus-wide important terms.
//
// Counts keyword occurrences across every paper's title and abstract and
// keeps the biomedical terms that show up more than once. Used to label a
// collection ("what is this reading list about?") rather than to rank.

use std::collections::HashMap;

use super::keywords::{extract_keywords, is_biomedical_term};
use crate::models::Paper;

/// Terms must occur at least this many times across the corpus.
pub const MIN_TERM_FREQUENCY: u32 = 2;

/// Frequent biomedical keywords across `papers`, most frequent first.
///
/// A paper's title and abstract keywords are counted separately, so a term
/// in both fields of one paper counts twice. Ties sort by term.
pub fn extract_important_terms(papers: &[Paper]) -> Vec<(String, u32)> {
    let mut frequency: HashMap<String, u32> = HashMap::new();

    for paper in papers {
        let keywords = extract_keywords(paper.title_text())
            .into_iter()
            .chain(extract_keywords(paper.abstract_str()));
        for keyword in keywords {
            *frequency.entry(keyword).or_insert(0) += 1;
        }
    }

    let mut important: Vec<(String, u32)> = frequency
        .into_iter()
        .filter(|(term, count)| *count >= MIN_TERM_FREQUENCY && is_biomedical_term(term))
        .collect();

    important.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    important
}
