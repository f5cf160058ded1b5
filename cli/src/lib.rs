use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use trieseek_core::{NormalizerConfig, SearchEngine, SearchHit, SearchOutcome};
use walkdir::WalkDir;

/// Pages loaded when no input is given.
pub const SAMPLE_PAGES: &[(&str, &str)] = &[
    ("https://example.com", "This is an example page with a search engine."),
    ("https://example2.com", "Another example page with algorithms and data."),
    ("https://example3.com", "The news are spreading quickly. Search engines use algorithms."),
    ("https://example4.com", "Exact match test: example search"),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputDoc {
    pub url: String,
    #[serde(alias = "body")]
    pub content: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

/// `.json`/`.jsonl` files under `path`, or `path` itself if it is a file. Sorted for stable ids.
pub fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
        files.sort();
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        bail!("input not found: {}", path.display());
    }
    Ok(files)
}

pub fn load_documents(path: &Path) -> Result<Vec<InputDoc>> {
    let mut docs = Vec::new();
    for file in collect_files(path)? {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut docs)?;
        } else {
            load_json(&file, &mut docs)?;
        }
    }
    Ok(docs)
}

fn load_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        docs.push(serde_json::from_str(&line)?);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => bail!("{}: expected a document object or an array of them", file.display()),
    }
    Ok(())
}

/// Engine loaded from `input`, or from the sample pages when `input` is `None`.
pub fn build_engine(input: Option<&Path>, config: NormalizerConfig) -> Result<SearchEngine> {
    let mut engine = SearchEngine::with_config(config);
    match input {
        Some(path) => {
            for doc in load_documents(path)? {
                engine.ingest(&doc.url, &doc.content);
            }
        }
        None => {
            for (url, content) in SAMPLE_PAGES {
                engine.ingest(url, content);
            }
        }
    }
    tracing::info!(num_docs = engine.len(), vocabulary = engine.vocabulary().len(), "documents ingested");
    Ok(engine)
}

pub fn render_outcome(query: &str, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoResults => format!("No results found for: {query}"),
        SearchOutcome::Hits(hits) => hits.iter().map(|h| h.to_string()).collect::<Vec<_>>().join("\n"),
    }
}

pub fn render_segmentations(splits: &[Vec<String>]) -> String {
    splits.iter().map(|s| s.join(" ")).collect::<Vec<_>>().join("\n")
}
