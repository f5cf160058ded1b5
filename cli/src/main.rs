use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};
use trieseek_cli::{build_engine, render_outcome, render_segmentations, SearchResponse};
use trieseek_core::NormalizerConfig;

#[derive(Parser)]
#[command(name = "trieseek")]
#[command(about = "Search, autocomplete and segment over an in-memory document set", long_about = None)]
struct Cli {
    /// Input path: .json/.jsonl file or directory of them. Defaults to the built-in sample pages
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// JSON file with normalizer settings, e.g. {"stopwords": [...], "nfkc": true}
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,
    /// Apply NFKC normalization before tokenizing
    #[arg(long, global = true, default_value_t = false)]
    nfkc: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents for a query
    Search {
        query: Vec<String>,
        /// Print a JSON response instead of one line per hit
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Suggest completions for the last word of the input
    Complete {
        input: Vec<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Split a string without spaces into vocabulary words
    Segment { text: String },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut config = match &cli.stopwords {
        Some(path) => NormalizerConfig::load(path)?,
        None => NormalizerConfig::default(),
    };
    config.nfkc |= cli.nfkc;
    let engine = build_engine(cli.input.as_deref(), config)?;

    match cli.command {
        Commands::Search { query, json } => {
            let query = query.join(" ");
            let start = Instant::now();
            let outcome = engine.search(&query);
            let took_s = start.elapsed().as_secs_f64();
            tracing::info!(%query, hits = outcome.hits().len(), took_s, "search");
            if json {
                let results = outcome.into_hits();
                let resp = SearchResponse { query, took_s, total_hits: results.len(), results };
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!("{}", render_outcome(&query, &outcome));
            }
        }
        Commands::Complete { input, limit } => {
            let line = input.join(" ");
            for s in engine.suggest(&line).into_iter().take(limit) {
                println!("{s}");
            }
        }
        Commands::Segment { text } => {
            let splits = engine.word_break(&text.to_lowercase());
            tracing::info!(%text, found = splits.len(), "segment");
            if !splits.is_empty() {
                println!("{}", render_segmentations(&splits));
            }
        }
    }
    Ok(())
}
