use crate::tokenizer::singularize;
use crate::DocId;
use std::collections::{BTreeSet, HashMap};

/// Token -> ids of the documents containing it. Postings only grow.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn add_document(&mut self, doc_id: DocId, tokens: &[String]) {
        for token in tokens {
            self.postings.entry(token.clone()).or_default().insert(doc_id);
        }
    }

    /// Union of the postings for the lowercased token and for its singular form.
    pub fn lookup(&self, raw_token: &str) -> BTreeSet<DocId> {
        let token = raw_token.to_lowercase();
        let singular = singularize(&token);
        let mut out = BTreeSet::new();
        if let Some(ids) = self.postings.get(token.as_str()) {
            out.extend(ids);
        }
        if singular != token.as_str() {
            if let Some(ids) = self.postings.get(&*singular) {
                out.extend(ids);
            }
        }
        out
    }

    /// Postings for exactly this key, no case folding or singular fallback.
    pub fn postings(&self, token: &str) -> Option<&BTreeSet<DocId>> { self.postings.get(token) }

    pub fn tokens(&self) -> impl Iterator<Item = &str> { self.postings.keys().map(String::as_str) }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}
