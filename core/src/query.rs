use crate::tokenizer::StopWords;
use std::collections::BTreeSet;

/// A parsed query: terms that score documents and terms that exclude them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool { self.plus_words.is_empty() && self.minus_words.is_empty() }
}

/// Parse a raw query. Words are split and stop-word-filtered exactly like documents; a word with a
/// leading `-` becomes an exclusion term with the dash removed.
///
/// The stop-word check runs on the word as written, so `-and` excludes `and` even when `and` is a
/// stop word (which then matches nothing, since stop words are never indexed). A bare `-` is
/// dropped.
pub fn parse_query(raw: &str, stop_words: &StopWords) -> Query {
    let mut query = Query::default();
    for word in stop_words.filter(raw) {
        match word.strip_prefix('-') {
            Some("") => tracing::trace!("ignoring bare exclusion marker"),
            Some(minus) => {
                query.minus_words.insert(minus.to_string());
            }
            None => {
                query.plus_words.insert(word.to_string());
            }
        }
    }
    query
}
