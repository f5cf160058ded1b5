use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn collect(&self, path: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(path.clone());
        }
        for (&c, child) in &self.children {
            path.push(c);
            child.collect(path, out);
            path.pop();
        }
    }
}

/// Prefix tree over the vocabulary. Each node owns its children outright.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self { Self::default() }

    /// Returns `true` if the word was not stored before.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, |n| n.terminal)
    }

    /// Every stored word starting with `prefix`, the prefix itself included if stored.
    ///
    /// Unbounded: the whole subtree is walked, so callers should cap what they consume.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut path = prefix.to_string();
            node.collect(&mut path, &mut out);
        }
        out
    }

    pub fn len(&self) -> usize { self.words }

    pub fn is_empty(&self) -> bool { self.words == 0 }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for w in iter {
            self.insert(w.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
