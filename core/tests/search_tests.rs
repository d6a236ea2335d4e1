use search_core::{DocId, Document, SearchConfig, SearchServer};

fn server(stop_words: &str, docs: &[&str]) -> SearchServer {
    let mut server = SearchServer::new();
    server.set_stop_words(stop_words);
    for (id, text) in docs.iter().enumerate() {
        server.add_document(id as DocId, text);
    }
    server
}

fn ids(docs: &[Document]) -> Vec<DocId> { docs.iter().map(|d| d.id).collect() }

#[test]
fn term_in_every_document_scores_zero_and_ties_by_id() {
    let server = server("and in on", &["a cat sat on a mat", "a dog and a cat played"]);
    let top = server.find_top_documents("cat");
    assert_eq!(ids(&top), vec![0, 1]);
    assert!(top.iter().all(|d| d.relevance == 0.0));
}

#[test]
fn higher_tf_ranks_first() {
    let docs = ["a cat sat on a mat", "cat and cat played", "a bird in a tree"];
    let server = server("and in on", &docs);
    let top = server.find_top_documents("cat");
    assert_eq!(ids(&top), vec![1, 0]);
    assert!(top[0].relevance > top[1].relevance);
    assert!(top[1].relevance > 0.0);
}

#[test]
fn minus_word_excludes_document() {
    let server = server("and in on", &["a cat sat on a mat", "a dog and a cat played"]);
    assert_eq!(ids(&server.find_top_documents("cat -dog")), vec![0]);
}

#[test]
fn minus_word_beats_high_score() {
    let server = server("", &["rare rare rare dog", "rare common", "common", "common"]);
    let top = server.find_top_documents("rare common -dog");
    assert_eq!(ids(&top), vec![1]);
}

#[test]
fn unknown_terms_give_empty_result() {
    let server = server("and in on", &["a cat sat on a mat", "a dog and a cat played"]);
    assert!(server.find_top_documents("zebra giraffe").is_empty());
    assert!(server.find_top_documents("").is_empty());
    assert!(server.find_top_documents("-cat").is_empty());
}

#[test]
fn stop_words_contribute_nothing() {
    let server = server("on", &["cat on mat", "dog"]);
    assert!(server.find_top_documents("on").is_empty());
    assert_eq!(ids(&server.find_top_documents("cat on")), ids(&server.find_top_documents("cat")));
    assert_eq!(server.index().document_frequency("on"), 0);
}

#[test]
fn bare_dash_does_not_change_results() {
    let server = server("", &["cat", "dog", "cat dog"]);
    assert_eq!(server.find_top_documents("cat -"), server.find_top_documents("cat"));
}

#[test]
fn never_returns_more_than_max_results() {
    let docs: Vec<String> = (0..12).map(|i| format!("word{i} shared")).collect();
    let mut texts: Vec<&str> = docs.iter().map(String::as_str).collect();
    texts.push("other");
    let server = server("", &texts);
    let top = server.find_top_documents("shared");
    assert_eq!(top.len(), 5);
    assert_eq!(ids(&top), vec![0, 1, 2, 3, 4]);
    assert_eq!(server.find_all_documents("shared").len(), 12);
}

#[test]
fn configured_max_results() {
    let mut server = SearchServer::with_config(SearchConfig { max_results: 2 });
    for (id, text) in ["x a", "x b", "x c", "y"].iter().enumerate() {
        server.add_document(id as DocId, text);
    }
    assert_eq!(ids(&server.find_top_documents("x")), vec![0, 1]);
}

#[test]
fn results_sorted_non_increasing() {
    let server = server(
        "the",
        &[
            "the quick fox",
            "quick quick brown",
            "lazy dog",
            "brown dog quick",
            "fox",
            "dog dog dog fox",
        ],
    );
    let top = server.find_top_documents("quick fox dog brown");
    for pair in top.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.relevance > b.relevance || (a.relevance == b.relevance && a.id < b.id));
    }
}

#[test]
fn repeated_queries_are_identical() {
    let server = server("and", &["cat and dog", "dog", "bird cat"]);
    assert_eq!(server.find_top_documents("cat -bird"), server.find_top_documents("cat -bird"));
}

#[test]
fn document_tf_sums_to_one() {
    let text = "x y x z z z w";
    let server = server("w", &[text, "y"]);
    let index = server.index();
    let sum: f64 = ["x", "y", "z"].iter().filter_map(|t| index.postings_for(t).get(&0)).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn empty_document_still_counts_toward_idf() {
    let mut a = SearchServer::new();
    a.add_document(0, "cat");
    a.add_document(1, "dog");
    let mut b = a.clone();
    b.add_document(2, "   ");
    assert_eq!(b.document_count(), 3);
    let ra = a.find_top_documents("cat")[0].relevance;
    let rb = b.find_top_documents("cat")[0].relevance;
    assert!((ra - 2f64.ln()).abs() < 1e-12);
    assert!((rb - 3f64.ln()).abs() < 1e-12);
}

#[test]
fn duplicate_id_double_counts() {
    let mut server = SearchServer::new();
    server.add_document(0, "cat");
    server.add_document(0, "cat");
    server.add_document(1, "dog");
    let top = server.find_top_documents("cat");
    assert_eq!(top.len(), 1);
    // tf accumulates to 2, N = 3, df = 1
    assert!((top[0].relevance - 2.0 * 3f64.ln()).abs() < 1e-12);
}

#[test]
fn output_line_format() {
    let server = server("", &["cat", "dog", "cat dog", "bird"]);
    let top = server.find_top_documents("cat");
    let lines: Vec<String> = top.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "{ document_id = 0, relevance = 0.693147 }",
            "{ document_id = 2, relevance = 0.346574 }",
        ]
    );
}
