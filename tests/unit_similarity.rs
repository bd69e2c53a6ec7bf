// Unit tests for cosine scoring and related-paper ranking properties.

use paperlink::models::Paper;
use paperlink::similarity::cosine::{
    calculate_similarity, cosine_from_frequencies, cosine_similarity, term_frequencies,
};
use paperlink::similarity::rank::{find_similar_papers, find_similar_papers_with};
use paperlink::similarity::weights::SimilarityWeights;

fn corpus() -> Vec<Paper> {
    vec![
        Paper::new("p1")
            .with_title("Tumor microenvironment immune cells")
            .with_abstract("Immune cell populations in the tumor microenvironment shape response."),
        Paper::new("p2")
            .with_title("Immune checkpoint inhibitor therapy in melanoma")
            .with_abstract("Checkpoint inhibitor therapy improves survival in melanoma."),
        Paper::new("p3")
            .with_title("Tumor immune infiltration predicts survival")
            .with_abstract("Immune cell infiltration of the tumor predicts survival."),
        Paper::new("p4")
            .with_title("Soil nitrogen cycling in grasslands")
            .with_abstract("Nitrogen fixation rates vary with rainfall."),
        Paper::new("p5"),
    ]
}

// ============================================================
// cosine_similarity
// ============================================================

#[test]
fn cosine_self_similarity_is_one() {
    let terms = vec!["tumor".to_string(), "immune".to_string(), "tumor immune".to_string()];
    let score = cosine_similarity(&terms, &terms.clone());
    assert!((score - 1.0).abs() < 1e-12, "got {score}");
}

#[test]
fn cosine_is_symmetric() {
    let a = vec!["x", "y", "z"];
    let b = vec!["x", "w"];
    let ab = cosine_similarity(&a, &b);
    let ba = cosine_similarity(&b, &a);
    assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
}

#[test]
fn cosine_empty_is_zero_not_nan() {
    let empty: Vec<&str> = vec![];
    let score = cosine_similarity(&empty, &["gene"]);
    assert_eq!(score, 0.0);
    assert!(!score.is_nan());
}

#[test]
fn cosine_uses_true_counts_for_raw_lists() {
    // a = {cell: 2}, b = {cell: 1, line: 1}: dot 2, |a| 2, |b| sqrt(2)
    let a = term_frequencies(&["cell", "cell"]);
    let b = term_frequencies(&["cell", "line"]);
    let expected = 2.0 / (2.0 * 2.0_f64.sqrt());
    assert!((cosine_from_frequencies(&a, &b) - expected).abs() < 1e-12);
}

// ============================================================
// calculate_similarity
// ============================================================

#[test]
fn overall_score_is_weighted_combination() {
    let papers = corpus();
    for a in &papers {
        for b in &papers {
            let r = calculate_similarity(a, b);
            let expected = 0.4 * r.title_similarity + 0.6 * r.abstract_similarity;
            assert!(
                (r.score - expected).abs() < 1e-12,
                "{} vs {}: {} != {}",
                a.pmid,
                b.pmid,
                r.score,
                expected
            );
        }
    }
}

#[test]
fn empty_paper_scores_zero() {
    let papers = corpus();
    let r = calculate_similarity(&papers[0], &papers[4]);
    assert_eq!(r.score, 0.0);
    assert!(r.matching_keywords.is_empty());
}

#[test]
fn matching_keywords_capped_at_ten() {
    let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda";
    let a = Paper::new("a").with_title(text).with_abstract(text);
    let b = Paper::new("b").with_title(text);
    let r = calculate_similarity(&a, &b);
    assert_eq!(r.matching_keywords.len(), 10);
    assert_eq!(r.matching_keywords[0], "alpha");
    assert_eq!(r.matching_keywords[9], "lambda");
}

#[test]
fn custom_cap_respected() {
    let a = Paper::new("a").with_title("alpha beta gamma delta");
    let weights = SimilarityWeights {
        max_matching_keywords: 2,
        ..SimilarityWeights::default()
    };
    let r = paperlink::similarity::cosine::calculate_similarity_with(&a, &a, &weights);
    assert_eq!(r.matching_keywords, vec!["alpha", "beta"]);
}

// ============================================================
// find_similar_papers — output invariants
// ============================================================

#[test]
fn ranking_never_includes_target() {
    let papers = corpus();
    for target in &papers {
        let results = find_similar_papers(target, &papers, 10);
        assert!(results.iter().all(|r| r.pmid != target.pmid));
    }
}

#[test]
fn ranking_sorted_bounded_and_thresholded() {
    let papers = corpus();
    for target in &papers {
        for max in 0..=5 {
            let results = find_similar_papers(target, &papers, max);
            assert!(results.len() <= max);
            for window in results.windows(2) {
                assert!(window[0].score >= window[1].score);
            }
            assert!(results.iter().all(|r| r.score > 0.01));
        }
    }
}

#[test]
fn immunology_papers_rank_together() {
    let papers = corpus();
    let results = find_similar_papers(&papers[0], &papers, 5);
    let ids: Vec<&str> = results.iter().map(|r| r.pmid.as_str()).collect();
    assert_eq!(ids.first(), Some(&"p3"));
    assert!(!ids.contains(&"p4"), "unrelated paper should be filtered");
    assert!(!ids.contains(&"p5"), "empty paper should be filtered");
}

#[test]
fn zero_threshold_still_excludes_zero_scores() {
    let papers = corpus();
    let weights = SimilarityWeights {
        min_score: 0.0,
        ..SimilarityWeights::default()
    };
    let results = find_similar_papers_with(&papers[3], &papers, 10, &weights);
    assert!(results.iter().all(|r| r.score > 0.0));
}
