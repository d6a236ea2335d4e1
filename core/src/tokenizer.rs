use std::collections::HashSet;

/// Split text into words on ASCII spaces. Runs of spaces collapse; no empty words are produced.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Set of terms excluded from both indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Repeated calls accumulate.
    pub fn set(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn is_stop(&self, term: &str) -> bool { self.words.contains(term) }

    /// Words of `text` in order, with stop words removed.
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if self.is_empty() {
            return split_into_words(text);
        }
        split_into_words(text).into_iter().filter(|w| !self.is_stop(w)).collect()
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
