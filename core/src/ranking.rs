use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "doc_id")]
    pub id: DocId,
    pub relevance: f64, // sum of tf * idf over matched query terms
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relevance = format_relevance(self.relevance);
        write!(f, "{{ document_id = {}, relevance = {} }}", self.id, relevance)
    }
}

/// `ln(N / df)`, or `None` when either count is zero.
pub fn inverse_document_frequency(num_docs: u64, df: usize) -> Option<f64> {
    if num_docs == 0 || df == 0 {
        return None;
    }
    let idf = (num_docs as f64 / df as f64).ln();
    idf.is_finite().then_some(idf)
}

/// Score every document matching a plus word, then drop every document containing a minus word.
/// Results come back in ascending id order, unsorted by relevance.
pub fn find_all_documents(query: &Query, index: &InvertedIndex) -> Vec<Document> {
    let num_docs = index.document_count();
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let postings = index.postings_for(word);
        let Some(idf) = inverse_document_frequency(num_docs, postings.len()) else {
            tracing::trace!(word = %word, "term not indexed, skipping");
            continue;
        };
        for (&doc_id, &tf) in postings {
            *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
        }
    }

    for word in &query.minus_words {
        for doc_id in index.postings_for(word).keys() {
            relevance.remove(doc_id);
        }
    }

    relevance.into_iter().map(|(id, relevance)| Document { id, relevance }).collect()
}

/// Order by descending relevance, ties by ascending id, and keep at most `max` documents.
pub fn top_documents(mut matched: Vec<Document>, max: usize) -> Vec<Document> {
    matched.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then_with(|| a.id.cmp(&b.id)));
    matched.truncate(max);
    matched
}

/// Six significant digits, trailing zeros trimmed, matching iostream's default float output.
/// Fixed or scientific notation is chosen from the exponent after rounding.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{value:.5e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exponent.parse::<i32>() else {
        return sci;
    };
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp) as usize;
        return trim_fraction(format!("{value:.decimals$}"));
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", trim_fraction(mantissa.to_string()), sign, exp.abs())
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
