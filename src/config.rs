use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::similarity::rank::DEFAULT_MAX_RESULTS;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Values are
/// kept raw and only parsed when a command asks for them, so a command line
/// flag always wins and a bad variable only fails the commands that read it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// PAPERLINK_CORPUS
    corpus: Option<String>,
    /// PAPERLINK_MAX_RESULTS
    max_results: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        Self::from_vars(
            env::var("PAPERLINK_CORPUS").ok(),
            env::var("PAPERLINK_MAX_RESULTS").ok(),
        )
    }

    /// Build a config from raw variable values. Split out from `load` so
    /// parsing can be tested without touching the process environment.
    pub fn from_vars(corpus: Option<String>, max_results: Option<String>) -> Self {
        Self {
            corpus,
            max_results,
        }
    }

    /// Corpus JSON file: the flag, else PAPERLINK_CORPUS, else ./papers.json.
    pub fn corpus_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| {
            self.corpus
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("./papers.json"))
    }

    /// Related papers to show: the flag, else PAPERLINK_MAX_RESULTS, else 5.
    ///
    /// The variable is only parsed when no flag is given.
    pub fn max_results(&self, flag: Option<usize>) -> Result<usize> {
        if let Some(n) = flag {
            return Ok(n);
        }

        match self.max_results.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_MAX_RESULTS),
            Some(raw) => {
                let n: usize = raw
                    .parse()
                    .with_context(|| format!("PAPERLINK_MAX_RESULTS is not a number: {raw}"))?;
                if n == 0 {
                    anyhow::bail!("PAPERLINK_MAX_RESULTS must be at least 1");
                }
                Ok(n)
            }
        }
    }
}
