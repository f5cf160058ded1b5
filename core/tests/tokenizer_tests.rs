use trieseek_core::tokenizer::{singularize, Normalizer};
use trieseek_core::NormalizerConfig;

#[test]
fn it_lowercases_and_strips_punctuation() {
    let n = Normalizer::default();
    let words = n.normalize("Exact match TEST: example, search!");
    assert_eq!(words, vec!["exact", "match", "test", "example", "search"]);
}

#[test]
fn it_emits_plural_and_singular() {
    let words = Normalizer::default().normalize("engines");
    assert!(words.contains(&"engines".to_string()));
    assert!(words.contains(&"engine".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let words = Normalizer::default().normalize("the cat and the hat");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["cat", "hat"]);
}

#[test]
fn stopwords_are_checked_before_singularizing() {
    // "is" is a stop word but "iss" is not; its singular "is" still gets emitted
    let words = Normalizer::default().normalize("iss");
    assert_eq!(words, vec!["iss", "is"]);
}

#[test]
fn singular_words_are_left_alone() {
    for w in ["engine", "data", "library", "y", "s", "quickly"] {
        assert_eq!(singularize(w), w);
        assert_eq!(singularize(&singularize(w)), w);
    }
}

#[test]
fn ies_becomes_y() {
    let words = Normalizer::default().normalize("Libraries");
    assert_eq!(words, vec!["libraries", "library"]);
}

#[test]
fn runs_of_spaces_and_digits() {
    let words = Normalizer::default().normalize("  rust   2024 ");
    assert_eq!(words, vec!["rust", "2024"]);
}

#[test]
fn non_space_whitespace_is_stripped_not_split() {
    // only ' ' separates words; tabs and newlines are dropped like punctuation
    let words = Normalizer::default().normalize("hello\nworld");
    assert_eq!(words, vec!["helloworld"]);
}

#[test]
fn custom_stopwords() {
    let n = Normalizer::new(NormalizerConfig::with_stopwords(["Rust"]));
    assert_eq!(n.normalize("rust the trie"), vec!["the", "trie"]);
}

#[test]
fn empty_and_punctuation_only() {
    let n = Normalizer::default();
    assert!(n.normalize("").is_empty());
    assert!(n.normalize("?!... --").is_empty());
}
