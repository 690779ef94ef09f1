use serde_json::json;
use std::collections::HashMap;
use std::io::Write;
use tfidf_core::{
    tokenize, DocumentDescriptor, DocumentInput, EngineConfig, Language, ProcessOutput, ResultTable, TfidfEngine, TfidfError,
};

fn engine() -> TfidfEngine { TfidfEngine::new(EngineConfig::default()).unwrap() }

fn batch(docs: &[(&str, &str)]) -> DocumentInput {
    DocumentInput::Batch(docs.iter().map(|(f, c)| DocumentDescriptor::new(*f, *c)).collect())
}

fn table<'a>(out: &'a ProcessOutput, name: &str) -> &'a ResultTable { &out.as_batch().unwrap()[name] }

fn row<'a>(t: &'a ResultTable, word: &str) -> &'a tfidf_core::ResultRow { t.iter().find(|r| r.word == word).unwrap() }

#[test]
fn single_document_scenario() {
    let out = engine()
        .process_json(json!({"filename": "a.txt", "content": "the cat sat on the mat"}), 10)
        .unwrap();
    let table = out.as_table().expect("single input returns a bare table");
    assert_eq!(table.len(), 3);
    let words: Vec<&str> = table.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "sat", "mat"]);
    for r in table {
        assert_eq!(r.tf, 1);
        assert_eq!(r.tf_norm, 0.3333);
        assert_eq!(r.idf, table[0].idf);
    }
}

#[test]
fn shared_term_scenario() {
    let out = engine().process(batch(&[("doc1", "cat cat dog"), ("doc2", "dog dog bird")]));
    let doc1 = table(&out, "doc1");
    let doc2 = table(&out, "doc2");

    assert_eq!(row(doc1, "cat").tf, 2);
    assert_eq!(row(doc1, "cat").tf_norm, 0.6667);
    assert_eq!(row(doc1, "dog").tf, 1);
    assert_eq!(row(doc1, "dog").tf_norm, 0.3333);
    assert!(row(doc1, "dog").idf < row(doc1, "cat").idf);
    assert_eq!(row(doc1, "cat").idf, row(doc2, "bird").idf);

    assert_eq!(doc1[0].word, "cat");
    // tf alone would put dog first
    assert_eq!(doc2[0].word, "bird");
    assert_eq!(doc2[1].word, "dog");
}

#[test]
fn empty_content_scenario() {
    let out = engine().process(batch(&[("a.txt", "rust is fast"), ("empty.txt", ""), ("b.txt", "rust is safe")]));
    assert!(table(&out, "empty.txt").is_empty());
    assert_eq!(table(&out, "a.txt").len(), 2);
    // the empty document still counts towards N
    let fast = row(table(&out, "a.txt"), "fast").idf;
    assert_eq!(fast, 1.6931);
}

#[test]
fn empty_batch_scenario() {
    let out = engine().process_json(json!([]), 50).unwrap();
    assert_eq!(out, ProcessOutput::Batch(Default::default()));
    assert_eq!(serde_json::to_string(&out).unwrap(), "{}");
}

#[test]
fn all_documents_without_tokens() {
    let out = engine().process(batch(&[("a", "the and of"), ("b", "   "), ("c", "123 !!!")]));
    let map = out.as_batch().unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.values().all(|t| t.is_empty()));
}

#[test]
fn missing_fields_get_defaults() {
    let out = engine().process_json(json!([{"content": "alpha beta"}, {"filename": "x.txt"}, {}]), 50).unwrap();
    let map = out.as_batch().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["unnamed_doc_0"].len(), 2);
    assert!(map["x.txt"].is_empty());
    assert!(map["unnamed_doc_2"].is_empty());
}

#[test]
fn duplicate_filenames_overwrite() {
    let out = engine().process(batch(&[("same.txt", "first words"), ("same.txt", "second")]));
    let map = out.as_batch().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["same.txt"][0].word, "second");
}

#[test]
fn malformed_input_is_rejected() {
    for bad in [json!(3), json!("text"), json!([1, 2]), json!({"filename": ["a"]})] {
        assert!(matches!(engine().process_json(bad, 50), Err(TfidfError::InputShape(_))));
    }
}

#[test]
fn tf_matches_token_counts_and_ordering_holds() {
    let docs = [
        ("a", "Rust makes systems programming safe. Rust compiles fast; the borrow checker helps!"),
        ("b", "Python is dynamic. Python programs are quick to write, and programming is fun."),
        ("c", "Systems programming in C is fast but unsafe. Safe code matters."),
    ];
    let out = engine().process_documents(batch(&docs), 4);
    for (name, content) in docs {
        let tokens = tokenize(content, Language::English);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for t in &tokens {
            *counts.entry(t.as_str()).or_insert(0) += 1;
        }
        let t = table(&out, name);
        assert!(t.len() <= 4);
        for r in t {
            assert_eq!(r.tf, counts[r.word.as_str()]);
            assert_eq!(r.tf_norm, tfidf_core::ranking::round4(r.tf as f64 / tokens.len() as f64));
            assert!(r.idf >= 0.0);
        }
        for pair in t.windows(2) {
            assert!((pair[0].idf, pair[0].tf) >= (pair[1].idf, pair[1].tf));
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let input = json!([{"filename": "a", "content": "one two two"}, {"filename": "b", "content": "two three"}]);
    let e = engine();
    let first = serde_json::to_string(&e.process_json(input.clone(), 50).unwrap()).unwrap();
    let second = serde_json::to_string(&e.process_json(input, 50).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stopword_file_extends_builtin_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# project jargon\nLorem\n\nipsum").unwrap();
    let config = EngineConfig { stopwords_file: Some(file.path().to_path_buf()), ..EngineConfig::default() };
    let out = TfidfEngine::new(config).unwrap().process(DocumentDescriptor::new("a", "lorem ipsum dolor").into());
    let words: Vec<&str> = out.as_table().unwrap().iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["dolor"]);
}

#[test]
fn missing_stopword_file_fails_at_setup() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig { stopwords_file: Some(dir.path().join("nope.txt")), ..EngineConfig::default() };
    let err = TfidfEngine::new(config).unwrap_err();
    assert!(err.is_setup_error());
    assert!(matches!(err, TfidfError::ResourceUnavailable { .. }));
}

#[test]
fn tie_on_fifth_decimal_rounds_to_even() {
    let content = format!("alpha {}", vec!["beta"; 31].join(" "));
    let out = engine().process(DocumentDescriptor::new("a.txt", content).into());
    let t = out.as_table().unwrap();
    assert_eq!(row(t, "alpha").tf, 1);
    assert_eq!(row(t, "alpha").tf_norm, 0.0312);
}
