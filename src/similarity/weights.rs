// Scoring constants for related-paper ranking.

/// Weights and cut-offs used when combining field similarities and ranking.
///
/// `score = title_similarity * title_weight + abstract_similarity * abstract_weight`
///
/// The abstract carries more weight because it is the richer signal; titles
/// are short enough that one shared word swings the cosine a lot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityWeights {
    /// Weight of the title cosine (default 0.4)
    pub title_weight: f64,
    /// Weight of the abstract cosine (default 0.6)
    pub abstract_weight: f64,
    /// Results must score strictly above this to be kept (default 0.01)
    pub min_score: f64,
    /// How many shared keywords to report per result (default 10)
    pub max_matching_keywords: usize,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            title_weight: 0.4,
            abstract_weight: 0.6,
            min_score: 0.01,
            max_matching_keywords: 10,
        }
    }
}

impl SimilarityWeights {
    /// Combine the two field similarities into one score.
    pub fn combine(&self, title_similarity: f64, abstract_similarity: f64) -> f64 {
        title_similarity * self.title_weight + abstract_similarity * self.abstract_weight
    }

    /// Whether a combined score clears the ranking threshold.
    pub fn passes(&self, score: f64) -> bool {
        score > self.min_score
    }
}
