use anyhow::Result;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

lazy_static! {
    static ref DEFAULT_STOPWORDS: HashSet<String> = {
        let words: &[&str] = &["the", "is", "and", "a", "an", "in", "of", "on", "for", "with", "to"];
        words.iter().map(|w| w.to_string()).collect()
    };
}

/// Normalization settings shared by ingestion and querying.
///
/// Built once and never mutated; the `Normalizer` takes ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default = "default_stopwords")]
    pub stopwords: HashSet<String>,
    /// Apply NFKC before lowercasing, folding compatibility forms like ligatures.
    #[serde(default)]
    pub nfkc: bool,
}

fn default_stopwords() -> HashSet<String> { DEFAULT_STOPWORDS.clone() }

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self { stopwords: default_stopwords(), nfkc: false }
    }
}

impl NormalizerConfig {
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords, nfkc: false }
    }

    pub fn is_stopword(&self, token: &str) -> bool { self.stopwords.contains(token) }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: NormalizerConfig = serde_json::from_str(json)?;
        // Tokens are compared after lowercasing, so the set must be lowercase too.
        config.stopwords = config.stopwords.into_iter().map(|w| w.to_lowercase()).collect();
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut f = File::open(path)?;
        let mut buf = String::new();
        f.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }
}
