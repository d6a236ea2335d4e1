use crate::index::{DocId, InvertedIndex};
use crate::query::{parse_query, Query};
use crate::ranking::{find_all_documents, top_documents, Document};
use crate::tokenizer::StopWords;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on the number of documents returned per query.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self { Self { max_results: MAX_RESULT_DOCUMENT_COUNT } }
}

/// Stop words, inverted index and corpus size for one search session.
///
/// Queries take `&self` and indexing takes `&mut self`; share it across threads behind a
/// read-write lock.
#[derive(Debug, Clone, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Stop words only affect documents added afterwards; set them before indexing.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.set(text);
        tracing::debug!(stop_words = self.stop_words.len(), "stop words configured");
    }

    pub fn add_document(&mut self, doc_id: DocId, text: &str) {
        let words = self.stop_words.filter(text);
        self.index.add_document(doc_id, &words);
    }

    pub fn parse_query(&self, raw_query: &str) -> Query { parse_query(raw_query, &self.stop_words) }

    /// Every matching document, ranked, without truncation.
    pub fn find_all_documents(&self, raw_query: &str) -> Vec<Document> {
        let query = self.parse_query(raw_query);
        let matched = find_all_documents(&query, &self.index);
        top_documents(matched, usize::MAX)
    }

    /// The best `max_results` documents for `raw_query`.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        let query = self.parse_query(raw_query);
        let matched = find_all_documents(&query, &self.index);
        let total = matched.len();
        let top = top_documents(matched, self.config.max_results);
        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            total,
            returned = top.len(),
            "query ranked"
        );
        top
    }

    pub fn document_count(&self) -> u64 { self.index.document_count() }

    pub fn term_count(&self) -> usize { self.index.term_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn config(&self) -> SearchConfig { self.config }
}
