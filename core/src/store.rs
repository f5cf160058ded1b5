use crate::DocId;
use std::collections::HashMap;
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub url: String,
    pub content: String,
    /// `content` lowercased and stripped, kept for exact phrase checks.
    pub cleaned: String,
    /// Count of every emitted token, singular forms included.
    pub frequencies: HashMap<String, u32>,
}

impl Document {
    pub fn frequency(&self, token: &str) -> u32 {
        self.frequencies.get(token).copied().unwrap_or(0)
    }
}

/// Append-only document storage; ids are positions in insertion order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, url: &str, content: &str, cleaned: String, tokens: &[String]) -> DocId {
        let id = self.docs.len() as DocId;
        let mut frequencies: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *frequencies.entry(token.clone()).or_insert(0) += 1;
        }
        self.docs.push(Document { id, url: url.to_string(), content: content.to_string(), cleaned, frequencies });
        id
    }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id as usize) }

    pub fn iter(&self) -> impl Iterator<Item = &Document> { self.docs.iter() }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

/// Panics on an unknown id. Ids only come from `add` and documents are never removed.
impl Index<DocId> for DocumentStore {
    type Output = Document;

    fn index(&self, id: DocId) -> &Document { &self.docs[id as usize] }
}
