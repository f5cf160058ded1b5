//! In-memory full-text search: normalization, inverted index, ranking,
//! prefix autocompletion and word segmentation over a small document set.

pub mod config;
pub mod engine;
pub mod index;
pub mod segment;
pub mod shared;
pub mod store;
pub mod tokenizer;
pub mod trie;

pub type DocId = u32;

pub use config::NormalizerConfig;
pub use engine::{SearchEngine, SearchHit, SearchOutcome};
pub use index::InvertedIndex;
pub use shared::SharedEngine;
pub use store::{Document, DocumentStore};
pub use tokenizer::Normalizer;
pub use trie::Trie;
