use std::collections::{BTreeMap, HashMap};

pub type TermId = u32;
pub type DocId = i64;

/// Postings of one term: document id to term frequency, iterated in ascending id order.
pub type Postings = BTreeMap<DocId, f64>;

static EMPTY_POSTINGS: Postings = BTreeMap::new();

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    dictionary: HashMap<String, TermId>,
    postings: Vec<Postings>, // indexed by TermId
    num_docs: u64,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index a document given its stop-word-filtered words.
    ///
    /// Each distinct word gets TF = occurrences / `words.len()`. A document with no words adds no
    /// postings but still counts toward the corpus size. Ids are not checked for uniqueness: a
    /// repeated id accumulates term frequency into the same bucket.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) {
        self.num_docs += 1;
        if words.is_empty() {
            tracing::debug!(doc_id, "document has no indexable words");
            return;
        }

        let step = 1.0 / words.len() as f64;
        let mut tf: HashMap<&str, f64> = HashMap::new();
        for &word in words {
            *tf.entry(word).or_insert(0.0) += step;
        }
        let distinct = tf.len();

        for (word, weight) in tf {
            let tid = self.term_id_or_insert(word);
            *self.postings[tid as usize].entry(doc_id).or_insert(0.0) += weight;
        }
        tracing::debug!(doc_id, words = words.len(), distinct, "indexed document");
    }

    fn term_id_or_insert(&mut self, term: &str) -> TermId {
        if let Some(&tid) = self.dictionary.get(term) {
            return tid;
        }
        let tid = self.postings.len() as TermId;
        self.dictionary.insert(term.to_string(), tid);
        self.postings.push(Postings::new());
        tid
    }

    /// Postings for `term`, empty when the term was never indexed.
    pub fn postings_for(&self, term: &str) -> &Postings {
        match self.dictionary.get(term) {
            Some(&tid) => &self.postings[tid as usize],
            None => &EMPTY_POSTINGS,
        }
    }

    /// Number of distinct documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize { self.postings_for(term).len() }

    /// Number of `add_document` calls so far.
    pub fn document_count(&self) -> u64 { self.num_docs }

    pub fn term_count(&self) -> usize { self.dictionary.len() }
}
