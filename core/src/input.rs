//! Reader for the line-oriented corpus format: a stop-word line, a document count line, that many
//! document lines, and optionally a query line.

use crate::search::{SearchConfig, SearchServer};
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing document count line")]
    MissingDocumentCount,
    #[error("invalid document count: {0:?}")]
    InvalidDocumentCount(String),
    #[error("document count must not be negative, got {0}")]
    NegativeDocumentCount(i64),
    #[error("expected {expected} documents, input ended after {found}")]
    MissingDocument { expected: usize, found: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    pub documents: Vec<String>,
}

impl Corpus {
    /// Build a search server with the stop words set first and documents numbered from 0.
    pub fn into_search_server(self, config: SearchConfig) -> SearchServer {
        let mut server = SearchServer::with_config(config);
        server.set_stop_words(&self.stop_words);
        for (doc_id, text) in self.documents.iter().enumerate() {
            server.add_document(doc_id as i64, text);
        }
        let num_docs = server.document_count();
        tracing::debug!(num_docs, num_terms = server.term_count(), "corpus indexed");
        server
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

pub fn read_corpus<R: BufRead>(reader: &mut R) -> Result<Corpus, InputError> {
    let stop_words = read_line(reader)?.unwrap_or_default();

    let count_line = read_line(reader)?.ok_or(InputError::MissingDocumentCount)?;
    let count: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidDocumentCount(count_line.clone()))?;
    let expected = usize::try_from(count).map_err(|_| InputError::NegativeDocumentCount(count))?;

    let mut documents = Vec::with_capacity(expected.min(1 << 16));
    while documents.len() < expected {
        match read_line(reader)? {
            Some(text) => documents.push(text),
            None => return Err(InputError::MissingDocument { expected, found: documents.len() }),
        }
    }
    Ok(Corpus { stop_words, documents })
}

/// Next line as the query; end of input is an empty query.
pub fn read_query<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    Ok(read_line(reader)?.unwrap_or_default())
}
