use crate::config::NormalizerConfig;
use crate::engine::{SearchEngine, SearchOutcome};
use crate::DocId;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle for many readers and one writer at a time.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedEngine {
    pub fn new(engine: SearchEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn with_config(config: NormalizerConfig) -> Self { Self::new(SearchEngine::with_config(config)) }

    pub fn ingest(&self, url: &str, content: &str) -> DocId { self.inner.write().ingest(url, content) }

    pub fn search(&self, query: &str) -> SearchOutcome { self.inner.read().search(query) }

    pub fn autocomplete(&self, prefix: &str) -> Vec<String> { self.inner.read().autocomplete(prefix) }

    pub fn suggest(&self, input: &str) -> Vec<String> { self.inner.read().suggest(input) }

    pub fn word_break(&self, text: &str) -> Vec<Vec<String>> { self.inner.read().word_break(text) }

    pub fn len(&self) -> usize { self.inner.read().len() }

    pub fn is_empty(&self) -> bool { self.inner.read().is_empty() }

    /// Run `f` under a single read lock, e.g. to inspect documents.
    pub fn read<R>(&self, f: impl FnOnce(&SearchEngine) -> R) -> R { f(&*self.inner.read()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn readers_share_one_engine() {
        let shared = SharedEngine::default();
        shared.ingest("https://a", "rust search engines");
        shared.ingest("https://b", "rust trie");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = shared.clone();
                thread::spawn(move || s.search("rust").hits().len())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 2);
        }
        assert_eq!(shared.len(), 2);
        assert_eq!(shared.read(|e| e.vocabulary().len()), 5);
    }

    #[test]
    fn writes_are_visible_to_clones() {
        let a = SharedEngine::default();
        let b = a.clone();
        assert!(b.is_empty());
        a.ingest("u", "catalog");
        assert_eq!(b.autocomplete("cat"), vec!["catalog"]);
    }
}
