use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use paperlink::config::Config;
use paperlink::corpus::Corpus;
use paperlink::output::terminal;
use paperlink::similarity;

/// Paperlink: find related papers in a literature corpus.
///
/// Papers are compared by keyword overlap of their titles and abstracts.
#[derive(Parser)]
#[command(name = "paperlink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the corpus by similarity to one paper
    Related {
        /// The pmid of the target paper
        pmid: String,

        /// How many related papers to show (default: PAPERLINK_MAX_RESULTS or 5)
        #[arg(long)]
        max: Option<usize>,

        /// Corpus JSON file (default: PAPERLINK_CORPUS or ./papers.json)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the similarity breakdown for two papers
    Compare {
        /// The target paper
        pmid_a: String,

        /// The candidate paper
        pmid_b: String,

        /// Corpus JSON file (default: PAPERLINK_CORPUS or ./papers.json)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the keywords extracted from a piece of text
    Keywords {
        /// Text to analyze (title or abstract)
        text: String,
    },

    /// List biomedical terms that recur across the corpus
    Terms {
        /// Corpus JSON file (default: PAPERLINK_CORPUS or ./papers.json)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("paperlink=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Related {
            pmid,
            max,
            corpus,
            json,
        } => {
            let config = Config::load();
            let max_results = config.max_results(max)?;
            let corpus = Corpus::load(&config.corpus_path(corpus))?;
            let target = corpus.require(&pmid)?;

            info!(pmid = %pmid, max_results, "Finding related papers");
            let results = similarity::find_similar_papers(target, corpus.papers(), max_results);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                terminal::display_related(target, &results, &corpus);
            }
        }

        Commands::Compare {
            pmid_a,
            pmid_b,
            corpus,
            json,
        } => {
            let corpus = Corpus::load(&Config::load().corpus_path(corpus))?;
            let a = corpus.require(&pmid_a)?;
            let b = corpus.require(&pmid_b)?;
            let result = similarity::calculate_similarity(a, b);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_comparison(a, b, &result);
            }
        }

        Commands::Keywords { text } => {
            let keywords = similarity::extract_keywords(&text);
            terminal::display_keywords(&keywords);
        }

        Commands::Terms { corpus } => {
            let corpus = Corpus::load(&Config::load().corpus_path(corpus))?;
            let terms = similarity::extract_important_terms(corpus.papers());
            terminal::display_terms(&terms);
        }
    }

    Ok(())
}
