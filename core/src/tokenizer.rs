use crate::config::NormalizerConfig;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STRIP: Regex = Regex::new(r"[^\p{L}\p{Nd} ]").expect("valid regex");
}

/// Naive singular form: "ies" -> "y", otherwise a trailing "s" is dropped.
pub fn singularize(word: &str) -> Cow<'_, str> {
    if word.len() > 2 && word.ends_with("ies") {
        Cow::Owned(format!("{}y", &word[..word.len() - 3]))
    } else if word.len() > 1 && word.ends_with('s') {
        Cow::Borrowed(&word[..word.len() - 1])
    } else {
        Cow::Borrowed(word)
    }
}

/// Turns raw text into index/query tokens.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self { Self { config } }

    pub fn config(&self) -> &NormalizerConfig { &self.config }

    /// Lowercase and drop everything except letters, digits and spaces.
    pub fn clean(&self, text: &str) -> String {
        let lowered = if self.config.nfkc {
            text.nfkc().collect::<String>().to_lowercase()
        } else {
            text.to_lowercase()
        };
        STRIP.replace_all(&lowered, "").into_owned()
    }

    /// Tokenize text, dropping stop words.
    ///
    /// Every surviving word is emitted as-is and, when it differs, once more in
    /// its singular form. Both forms become separate index keys so a query for
    /// "engine" also reaches documents that only say "engines"; this trades a
    /// little precision and doubled frequency counts for recall.
    pub fn normalize(&self, text: &str) -> Vec<String> { self.tokenize_cleaned(&self.clean(text)) }

    /// Same as `normalize` for text that already went through `clean`.
    pub fn tokenize_cleaned(&self, cleaned: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in cleaned.split(' ').filter(|w| !w.is_empty()) {
            if self.config.is_stopword(word) { continue; }
            tokens.push(word.to_string());
            let singular = singularize(word);
            if singular != word {
                tokens.push(singular.into_owned());
            }
        }
        tokens
    }
}
