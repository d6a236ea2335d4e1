pub mod index;
pub mod input;
pub mod query;
pub mod ranking;
pub mod search;
pub mod tokenizer;

pub use index::{DocId, InvertedIndex, Postings, TermId};
pub use input::{read_corpus, read_query, Corpus, InputError};
pub use query::{parse_query, Query};
pub use ranking::Document;
pub use search::{SearchConfig, SearchServer, MAX_RESULT_DOCUMENT_COUNT};
pub use tokenizer::{split_into_words, StopWords};
