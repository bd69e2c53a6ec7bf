// Static vocabulary tables for keyword extraction.
//
// Built once on first use and shared read-only for the life of the process.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// English function words plus research-paper boilerplate that says nothing
/// about what a paper is actually about.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "this", "that", "these", "those", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
        "may", "might", "can", "must", "shall", "we", "our", "us", "i", "me", "my", "you", "your",
        "he", "him", "his", "she", "her", "it", "its", "they", "them", "their",
        // Paper boilerplate
        "study", "studies", "research", "analysis", "results", "conclusion", "background",
        "methods", "objective", "purpose", "introduction", "discussion", "patients", "patient",
        "subjects", "participants", "data", "using", "used", "significantly", "increase",
        "increased", "decrease", "decreased", "effect", "effects", "treatment", "control",
        "group", "groups", "compared", "comparison", "vs", "versus",
    ]
    .into_iter()
    .collect()
});

/// Biomedical abbreviations expanded in place of the short form.
pub static ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("dna", "deoxyribonucleic acid"),
        ("rna", "ribonucleic acid"),
        ("pcr", "polymerase chain reaction"),
        ("mri", "magnetic resonance imaging"),
        ("ct", "computed tomography"),
        ("hiv", "human immunodeficiency virus"),
        ("aids", "acquired immunodeficiency syndrome"),
        ("covid", "coronavirus disease"),
        ("sars", "severe acute respiratory syndrome"),
        ("who", "world health organization"),
        ("fda", "food and drug administration"),
        ("nih", "national institutes of health"),
        ("cdc", "centers for disease control"),
        ("icu", "intensive care unit"),
        ("er", "emergency room"),
        ("bp", "blood pressure"),
        ("bmi", "body mass index"),
        ("ecg", "electrocardiogram"),
        ("eeg", "electroencephalogram"),
    ]
    .into_iter()
    .collect()
});

/// Substrings that mark a phrase as biomedical. Matched anywhere in the
/// lowercased phrase, so "gene" also matches "genetic" and "generation".
pub const BIOMEDICAL_MARKERS: &[&str] = &[
    "protein", "gene", "cell", "tissue", "cancer", "tumor", "disease", "therapy", "treatment",
    "drug", "medicine", "clinical", "patient", "syndrome", "disorder", "infection", "virus",
    "bacteria", "immune", "blood", "brain", "heart", "kidney", "liver", "lung", "bone", "muscle",
    "nerve", "hormone", "enzyme", "antibody", "vaccine", "diagnosis", "screening", "biomarker",
    "pathway", "mechanism", "receptor", "inhibitor", "activation", "expression", "mutation",
];
