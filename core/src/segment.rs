use crate::trie::Trie;
use std::collections::HashMap;

/// All ways to split `text` into words stored in `vocabulary`.
///
/// Joining any returned segmentation with single spaces, after removing the
/// spaces, gives back `text`. An empty input has exactly one segmentation,
/// the empty one; an input with no decomposition yields none.
pub fn word_break(text: &str, vocabulary: &Trie) -> Vec<Vec<String>> {
    let mut memo: HashMap<&str, Vec<Vec<String>>> = HashMap::new();
    let out = segment(text, vocabulary, &mut memo);
    tracing::trace!(input = text, suffixes = memo.len(), found = out.len(), "word break");
    out
}

fn segment<'a>(rest: &'a str, vocabulary: &Trie, memo: &mut HashMap<&'a str, Vec<Vec<String>>>) -> Vec<Vec<String>> {
    if rest.is_empty() {
        return vec![Vec::new()];
    }
    if let Some(done) = memo.get(rest) {
        return done.clone();
    }
    let mut results = Vec::new();
    let ends = rest.char_indices().skip(1).map(|(i, _)| i).chain(std::iter::once(rest.len()));
    for end in ends {
        let word = &rest[..end];
        if !vocabulary.contains(word) { continue; }
        for tail in segment(&rest[end..], vocabulary, memo) {
            let mut split = Vec::with_capacity(tail.len() + 1);
            split.push(word.to_string());
            split.extend(tail);
            results.push(split);
        }
    }
    memo.insert(rest, results.clone());
    results
}
