// Data types shared by the similarity engine, the corpus loader and the CLI.
//
// Field names on the wire are camelCase so a corpus exported from the review
// UI (or straight from a PubMed fetch) deserializes without a mapping layer.

use serde::{Deserialize, Serialize};

/// A paper as seen by the similarity engine.
///
/// Only the identifier is required. A missing title or abstract contributes
/// nothing to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed identifier (or any id unique within one ranking call)
    pub pmid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
}

impl Paper {
    pub fn new(pmid: impl Into<String>) -> Self {
        Self {
            pmid: pmid.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    /// Title text, or "" when absent.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Abstract text, or "" when absent.
    pub fn abstract_str(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or("")
    }
}

/// Result of comparing a target paper against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    /// The candidate's identifier (never the target's)
    pub pmid: String,
    /// Weighted combination of the title and abstract similarities
    pub score: f64,
    /// Keywords present in both papers, capped for display
    pub matching_keywords: Vec<String>,
    pub title_similarity: f64,
    pub abstract_similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserializes_abstract_field() {
        let json = r#"{"pmid":"123","title":"T","abstract":"A"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.pmid, "123");
        assert_eq!(paper.title_text(), "T");
        assert_eq!(paper.abstract_str(), "A");
    }

    #[test]
    fn test_paper_missing_fields_default_to_empty() {
        let paper: Paper = serde_json::from_str(r#"{"pmid":"9"}"#).unwrap();
        assert!(paper.title.is_none());
        assert_eq!(paper.title_text(), "");
        assert_eq!(paper.abstract_str(), "");
    }

    #[test]
    fn test_score_serializes_camel_case() {
        let score = SimilarityScore {
            pmid: "1".to_string(),
            score: 0.5,
            matching_keywords: vec!["gene".to_string()],
            title_similarity: 0.5,
            abstract_similarity: 0.5,
        };
        let json = serde_json::to_string(&score).unwrap();
        assert!(json.contains("\"matchingKeywords\""));
        assert!(json.contains("\"titleSimilarity\""));
        assert!(json.contains("\"abstractSimilarity\""));
    }
}
