// Related-paper ranking for one target paper.

use tracing::{debug, info};

use super::cosine::calculate_similarity_with;
use super::weights::SimilarityWeights;
use crate::models::{Paper, SimilarityScore};

/// Default number of related papers shown for a selected paper.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Rank `candidates` by similarity to `target` using the default weights.
pub fn find_similar_papers(
    target: &Paper,
    candidates: &[Paper],
    max_results: usize,
) -> Vec<SimilarityScore> {
    find_similar_papers_with(target, candidates, max_results, &SimilarityWeights::default())
}

/// Rank `candidates` by similarity to `target`.
///
/// The target itself (matched by pmid) is never compared. Results at or
/// below `weights.min_score` are dropped, the rest are sorted by score
/// descending and truncated to `max_results`. The sort is stable, so equal
/// scores keep candidate input order.
pub fn find_similar_papers_with(
    target: &Paper,
    candidates: &[Paper],
    max_results: usize,
    weights: &SimilarityWeights,
) -> Vec<SimilarityScore> {
    if candidates.is_empty() {
        debug!(target = %target.pmid, "No candidate papers to compare against");
        return Vec::new();
    }

    let mut results: Vec<SimilarityScore> = candidates
        .iter()
        .filter(|paper| paper.pmid != target.pmid)
        .map(|paper| calculate_similarity_with(target, paper, weights))
        .filter(|result| {
            let passes = weights.passes(result.score);
            debug!(
                candidate = %result.pmid,
                score = result.score,
                passes,
                "Threshold check"
            );
            passes
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(max_results);

    info!(
        target = %target.pmid,
        candidates = candidates.len(),
        found = results.len(),
        "Ranked similar papers"
    );

    results
}
