use crate::config::NormalizerConfig;
use crate::index::InvertedIndex;
use crate::segment::word_break;
use crate::store::{Document, DocumentStore};
use crate::tokenizer::Normalizer;
use crate::trie::Trie;
use crate::DocId;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub url: String,
    /// Query tokens whose postings contained this document.
    pub match_count: u32,
    /// Sum of the document's frequencies for the literal query tokens.
    pub frequency_sum: u32,
    /// The cleaned query is a substring of the cleaned document text.
    pub exact_match: bool,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found: {} (Matches: {}, Frequency Sum: {}", self.url, self.match_count, self.frequency_sum)?;
        if self.exact_match {
            write!(f, ", Exact Match")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Hits(Vec<SearchHit>),
    NoResults,
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Hits(hits) => hits,
            SearchOutcome::NoResults => &[],
        }
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            SearchOutcome::Hits(hits) => hits,
            SearchOutcome::NoResults => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool { matches!(self, SearchOutcome::NoResults) }
}

/// In-memory search engine: document store, inverted index and vocabulary trie.
///
/// Ingestion takes `&mut self` and queries take `&self`, so all documents are
/// in place before any query can observe the engine.
#[derive(Debug, Default)]
pub struct SearchEngine {
    normalizer: Normalizer,
    store: DocumentStore,
    index: InvertedIndex,
    vocabulary: Trie,
}

#[derive(Default)]
struct Tally {
    match_count: u32,
    frequency_sum: u32,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { normalizer: Normalizer::new(config), ..Self::default() }
    }

    /// Normalize once and feed the tokens to the store, the index and the trie.
    pub fn ingest(&mut self, url: &str, content: &str) -> DocId {
        let cleaned = self.normalizer.clean(content);
        let tokens = self.normalizer.tokenize_cleaned(&cleaned);
        let doc_id = self.store.add(url, content, cleaned, &tokens);
        self.index.add_document(doc_id, &tokens);
        self.vocabulary.extend(&tokens);
        tracing::debug!(doc_id, url, tokens = tokens.len(), vocabulary = self.vocabulary.len(), "ingested document");
        doc_id
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        let tokens = self.normalizer.normalize(query);
        let mut tallies: HashMap<DocId, Tally> = HashMap::new();
        for token in &tokens {
            for doc_id in self.index.lookup(token) {
                let tally = tallies.entry(doc_id).or_default();
                tally.match_count += 1;
                // Literal token, not the singular form that may have matched.
                tally.frequency_sum += self.store[doc_id].frequency(token);
            }
        }
        if tallies.is_empty() {
            tracing::debug!(query, tokens = tokens.len(), "no results");
            return SearchOutcome::NoResults;
        }

        let exact = self.exact_matches(query);
        let mut hits: Vec<SearchHit> = tallies
            .into_iter()
            .map(|(doc_id, t)| SearchHit {
                doc_id,
                url: self.store[doc_id].url.clone(),
                match_count: t.match_count,
                frequency_sum: t.frequency_sum,
                exact_match: exact.contains(&doc_id),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.exact_match
                .cmp(&a.exact_match)
                .then(b.match_count.cmp(&a.match_count))
                .then(b.frequency_sum.cmp(&a.frequency_sum))
                .then(a.doc_id.cmp(&b.doc_id))
        });
        tracing::debug!(query, hits = hits.len(), exact = exact.len(), "search complete");
        SearchOutcome::Hits(hits)
    }

    /// Documents whose cleaned text contains the cleaned query verbatim.
    fn exact_matches(&self, query: &str) -> BTreeSet<DocId> {
        let needle = self.normalizer.clean(query);
        self.store
            .iter()
            .filter(|d| d.cleaned.contains(&needle))
            .map(|d| d.id)
            .collect()
    }

    pub fn autocomplete(&self, prefix: &str) -> Vec<String> { self.vocabulary.autocomplete(prefix) }

    /// Sorted completions for the last word of an in-progress input line.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let last = last_word(input);
        if last.is_empty() {
            return Vec::new();
        }
        let mut out = self.vocabulary.autocomplete(&last.to_lowercase());
        out.sort();
        out
    }

    pub fn word_break(&self, text: &str) -> Vec<Vec<String>> { word_break(text, &self.vocabulary) }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> { self.store.get(doc_id) }

    pub fn documents(&self) -> impl Iterator<Item = &Document> { self.store.iter() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn vocabulary(&self) -> &Trie { &self.vocabulary }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

    pub fn len(&self) -> usize { self.store.len() }

    pub fn is_empty(&self) -> bool { self.store.is_empty() }
}

/// Text after the last space of an input line.
pub fn last_word(input: &str) -> &str {
    match input.rfind(' ') {
        Some(pos) => &input[pos + 1..],
        None => input,
    }
}
