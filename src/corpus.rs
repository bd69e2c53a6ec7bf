// Paper corpus loading.
//
// A corpus is a JSON array of `{pmid, title?, abstract?}` objects, the same
// shape the review UI keeps in memory. Extra fields (authors, journal, doi)
// are ignored.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Paper;

/// An in-memory set of papers with unique identifiers.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    papers: Vec<Paper>,
}

impl Corpus {
    /// Build a corpus, rejecting empty or duplicate identifiers.
    pub fn new(papers: Vec<Paper>) -> Result<Self> {
        validate_ids(&papers)?;
        Ok(Self { papers })
    }

    /// Parse a corpus from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let papers: Vec<Paper> =
            serde_json::from_str(json).context("Corpus is not a JSON array of papers")?;
        Self::new(papers)
    }

    /// Read and parse a corpus file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
        let corpus = Self::from_json(&json)
            .with_context(|| format!("Invalid corpus file {}", path.display()))?;
        info!(papers = corpus.len(), path = %path.display(), "Loaded corpus");
        Ok(corpus)
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Look up a paper by pmid.
    pub fn get(&self, pmid: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.pmid == pmid)
    }

    /// Like `get`, but an unknown pmid is an error.
    pub fn require(&self, pmid: &str) -> Result<&Paper> {
        self.get(pmid)
            .with_context(|| format!("No paper with pmid {pmid} in corpus"))
    }
}

fn validate_ids(papers: &[Paper]) -> Result<()> {
    let mut seen = HashSet::with_capacity(papers.len());
    for (i, paper) in papers.iter().enumerate() {
        if paper.pmid.trim().is_empty() {
            anyhow::bail!("Paper at index {i} has an empty pmid");
        }
        if !seen.insert(paper.pmid.as_str()) {
            anyhow::bail!("Duplicate pmid in corpus: {}", paper.pmid);
        }
    }
    Ok(())
}
