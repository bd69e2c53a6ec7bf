// Related-paper similarity — keyword extraction, cosine scoring and ranking.

pub mod cosine;
pub mod keywords;
pub mod rank;
pub mod terms;
pub mod vocab;
pub mod weights;

pub use cosine::{calculate_similarity, cosine_similarity};
pub use keywords::extract_keywords;
pub use rank::find_similar_papers;
pub use terms::extract_important_terms;
