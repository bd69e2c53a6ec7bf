// Colored terminal output for related-paper lists and keyword breakdowns.
//
// main.rs delegates all human-readable rendering here; the --json paths
// bypass this module entirely.

use colored::Colorize;

use super::truncate_chars;
use crate::corpus::Corpus;
use crate::models::{Paper, SimilarityScore};

/// Display the ranked related papers for one target.
pub fn display_related(target: &Paper, results: &[SimilarityScore], corpus: &Corpus) {
    println!(
        "\n{}",
        format!("=== Related to {} ===", target.pmid).bold()
    );
    println!("  {}", truncate_chars(target.title_text(), 90).dimmed());
    println!();

    if results.is_empty() {
        println!("  No related papers scored above the threshold.");
        return;
    }

    println!(
        "  {:>4}  {:<14} {:>6}  {:>6}  {:>8}  {}",
        "Rank".dimmed(),
        "PMID".dimmed(),
        "Score".dimmed(),
        "Title".dimmed(),
        "Abstract".dimmed(),
        "Paper".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, result) in results.iter().enumerate() {
        let title = corpus
            .get(&result.pmid)
            .map(|p| truncate_chars(p.title_text(), 40))
            .unwrap_or_default();
        println!(
            "  {:>4}. {:<14} {}  {:>6.3}  {:>8.3}  {}",
            i + 1,
            result.pmid,
            colorize_score(result.score),
            result.title_similarity,
            result.abstract_similarity,
            title,
        );
        if !result.matching_keywords.is_empty() {
            println!(
                "        Shared: {}",
                result.matching_keywords.join(", ").dimmed()
            );
        }
    }
    println!();
}

/// Display the full breakdown of a single pairwise comparison.
pub fn display_comparison(a: &Paper, b: &Paper, result: &SimilarityScore) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", a.pmid, b.pmid).bold()
    );
    println!("  Overall score:       {}", colorize_score(result.score));
    println!("  Title similarity:    {:.3}", result.title_similarity);
    println!("  Abstract similarity: {:.3}", result.abstract_similarity);
    if result.matching_keywords.is_empty() {
        println!("  Shared keywords:     {}", "none".dimmed());
    } else {
        println!(
            "  Shared keywords:     {}",
            result.matching_keywords.join(", ")
        );
    }
    println!();
}

/// Display an extracted keyword list, one per line.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("No keywords extracted.");
        return;
    }
    println!(
        "\n{}",
        format!("=== {} keywords ===", keywords.len()).bold()
    );
    for keyword in keywords {
        println!("  {keyword}");
    }
    println!();
}

/// Display corpus-wide important terms as a bar chart.
pub fn display_terms(terms: &[(String, u32)]) {
    if terms.is_empty() {
        println!("No biomedical terms occur more than once in this corpus.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Important Terms ({}) ===", terms.len()).bold()
    );
    println!();

    let bar_width: usize = 20;
    let max = terms.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);

    for (term, count) in terms {
        let filled = ((*count as f64 / max as f64) * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        println!("  {:<40} {} {}", term.bold(), bar.bright_blue(), count);
    }
    println!();
}

/// Colorize a similarity score by strength.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>6.3}");
    if score >= 0.3 {
        text.bright_green().bold()
    } else if score >= 0.1 {
        text.bright_yellow()
    } else {
        text.dimmed()
    }
}
