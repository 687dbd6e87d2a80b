use std::{sync::Arc, thread};

use wordlist_engine::errors::QueryError;
use wordlist_engine::persistence::{Header, Row, Table, WordListRegistry};
use wordlist_engine::query::{MatchRecord, QueryEngine, QueryResult, project, query};

const ANIMALS: &str = "name\tlegs\ncat\t4\ndog\t4\nbird\t2\nfish\t0\textra\n";

fn _registry() -> WordListRegistry {
    let mut registry = WordListRegistry::new();
    registry.insert(Table::parse("animals", ANIMALS));
    registry
}

fn _record(pairs: &[(&str, &str)]) -> MatchRecord {
    pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect()
}

fn _keys(result: &QueryResult) -> Vec<String> {
    result.matches.iter().map(|record| record["name"].clone()).collect()
}

#[test]
fn query_anchored_pattern() {
    let result = query(&_registry(), "animals", "^b").unwrap();

    assert_eq!(result.matches, vec![_record(&[("name", "bird"), ("legs", "2")])]);
}

#[test]
fn query_without_matches_is_empty_success() {
    let result = query(&_registry(), "animals", "[0-9]").unwrap();

    assert!(result.is_empty());
}

#[test]
fn query_unknown_list() {
    let error = query(&_registry(), "unknownlist", "a").unwrap_err();

    assert_eq!(
        error,
        QueryError::UnknownList {
            requested: "unknownlist".to_string(),
            available: vec!["animals".to_string()],
        }
    );
}

#[test]
fn query_unknown_list_wins_over_bad_pattern() {
    let error = query(&_registry(), "plants", "(").unwrap_err();

    assert!(matches!(error, QueryError::UnknownList { .. }));
}

#[test]
fn query_invalid_pattern_keeps_input() {
    let error = query(&_registry(), "animals", "(").unwrap_err();

    match error {
        QueryError::InvalidPattern { pattern, message } => {
            assert_eq!(pattern, "(");
            assert!(message.contains("unclosed group"), "{}", message);
        }
        other => panic!("expected an invalid pattern, got {:?}", other),
    }
}

#[test]
fn query_error_display() {
    let error = query(&_registry(), "plants", "a").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid word list 'plants'. Try one of: [\"animals\"]"
    );

    let error = query(&_registry(), "animals", "(").unwrap_err();
    assert!(error.to_string().starts_with("invalid regex: "));
    assert!(error.to_string().ends_with("Input was: '('"));
}

#[test]
fn query_searches_anywhere_in_key() {
    let result = query(&_registry(), "animals", "o").unwrap();
    assert_eq!(_keys(&result), ["dog"]);

    let result = query(&_registry(), "animals", "i").unwrap();
    assert_eq!(_keys(&result), ["bird"]);

    let result = query(&_registry(), "animals", "").unwrap();
    assert_eq!(_keys(&result), ["cat", "dog", "bird"]);
}

#[test]
fn query_only_searches_key_column() {
    let result = query(&_registry(), "animals", "4").unwrap();

    assert!(result.is_empty());
}

#[test]
fn query_malformed_row_never_matches() {
    let result = query(&_registry(), "animals", "fish").unwrap();

    assert!(result.is_empty());
    assert_eq!(_registry().lookup("animals").unwrap().rows(), 3);
}

#[test]
fn query_is_repeatable() {
    let registry = _registry();
    let first = query(&registry, "animals", "^[cd]").unwrap();
    let second = query(&registry, "animals", "^[cd]").unwrap();

    assert_eq!(first, second);
    assert_eq!(_keys(&first), ["cat", "dog"]);
}

#[test]
fn query_on_headerless_list() {
    let mut registry = WordListRegistry::new();
    registry.insert(Table::parse("empty", "# nothing here\n"));

    let result = query(&registry, "empty", ".").unwrap();
    assert!(result.is_empty());
}

#[test]
fn query_engine_respects_size_limit() {
    let engine = QueryEngine::new(Arc::new(_registry())).with_pattern_size_limit(64);

    let error = engine.query("animals", r"\w{20}").unwrap_err();
    match error {
        QueryError::InvalidPattern { pattern, .. } => assert_eq!(pattern, r"\w{20}"),
        other => panic!("expected an invalid pattern, got {:?}", other),
    }

    let engine = QueryEngine::new(Arc::new(_registry()));
    assert!(engine.query("animals", r"\w{20}").unwrap().is_empty());
}

#[test]
fn query_rejects_unsupported_syntax() {
    let error = query(&_registry(), "animals", r"(?=c)").unwrap_err();

    assert!(matches!(error, QueryError::InvalidPattern { .. }));
}

#[test]
fn query_concurrent_readers() {
    let engine = QueryEngine::new(Arc::new(_registry()));

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let engine = engine.clone();
            thread::spawn(move || {
                let pattern = if index % 2 == 0 { "^[bc]" } else { "g$" };
                engine.query("animals", pattern).unwrap()
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if index % 2 == 0 {
            assert_eq!(_keys(&result), ["cat", "bird"]);
        } else {
            assert_eq!(_keys(&result), ["dog"]);
        }
    }
}

#[test]
fn project_pairs_header_with_fields() {
    let header = Header::new(vec!["word".to_string(), "pos".to_string(), "gloss".to_string()]);
    let rows = vec![
        Row(vec!["run".to_string(), "verb".to_string(), "move fast".to_string()]),
        Row(vec!["red".to_string(), "adj".to_string(), "".to_string()]),
    ];

    let result = project(&header, &rows);

    assert_eq!(result.len(), 2);
    assert_eq!(
        result.matches[1],
        _record(&[("word", "red"), ("pos", "adj"), ("gloss", "")])
    );
    let columns: Vec<&String> = result.matches[0].keys().collect();
    assert_eq!(columns, ["word", "pos", "gloss"]);
}

#[test]
fn project_duplicate_columns_keep_last_value() {
    let header = Header::new(vec!["name".to_string(), "name".to_string()]);
    let rows = vec![Row(vec!["first".to_string(), "second".to_string()])];

    let result = project(&header, &rows);

    assert_eq!(result.matches[0], _record(&[("name", "second")]));
}

#[test]
fn query_result_serializes_in_header_order() {
    let result = query(&_registry(), "animals", "^[cb]").unwrap();

    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"matches":[{"name":"cat","legs":"4"},{"name":"bird","legs":"2"}]}"#
    );
    assert_eq!(
        serde_json::to_string(&QueryResult::default()).unwrap(),
        r#"{"matches":[]}"#
    );
}
