//! Loading knowledge bases from disk and feeding them through the front end.

use std::io::Write;

use hwdiag_logic::loader::{describe_failure, load, try_load};
use hwdiag_logic::{infer, render_result, select_facts, Error, FactSet};
use tempfile::NamedTempFile;

fn write_kb(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Test: a well-formed file loads in document order
#[test]
fn test_load_valid_file() {
    let file = write_kb(
        r#"{
            "conditions": ["A", "B", "C"],
            "rules": [{"if": ["A", "B"], "then": "X"}, {"if": ["C"], "then": "Y"}],
            "exclusions": [["B", "C"]]
        }"#,
    );

    let kb = try_load(file.path()).unwrap();
    assert_eq!(kb.conditions().len(), 3);
    assert_eq!(kb.rules()[1].conclusion().as_str(), "Y");
    assert_eq!(kb.exclusions().len(), 1);
    assert_eq!(load(file.path()), kb);
}

/// Test: malformed content degrades to an empty knowledge base
#[test]
fn test_load_malformed_file_degrades() {
    let file = write_kb("{ this is not json");
    assert!(matches!(try_load(file.path()), Err(Error::Format(_))));

    let kb = load(file.path());
    assert!(kb.is_empty());
    let facts: FactSet = ["A"].into_iter().collect();
    assert_eq!(infer(&kb, &facts).to_string(), "Infer Failed");
}

/// Test: a top-level array is not a knowledge base
#[test]
fn test_load_array_document_degrades() {
    let file = write_kb(r#"[{"if": ["A"], "then": "X"}]"#);
    assert!(load(file.path()).is_empty());
}

/// Test: a missing file degrades to an empty knowledge base
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("knowledge_base.json");

    assert!(matches!(try_load(&path), Err(Error::Io(_))));
    assert!(load(&path).is_empty());
}

/// Test: a directory is reported as unreadable, not as malformed
#[test]
fn test_load_directory_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();

    let err = try_load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(describe_failure(dir.path(), &err).starts_with("Cannot read file "));
    assert!(load(dir.path()).is_empty());
}

/// Test: rules with no conditions are dropped while loading
#[test]
fn test_load_skips_empty_rules() {
    let file = write_kb(r#"{"rules": [{"if": [], "then": "Broken"}, {"if": ["A"], "then": "X"}]}"#);
    let kb = try_load(file.path()).unwrap();
    assert_eq!(kb.rules().len(), 1);
}

/// Test: select, infer and render like the interactive front end
#[test]
fn test_front_end_flow() {
    let file = write_kb(
        r#"{
            "conditions": ["A", "B", "C"],
            "rules": [{"if": ["A", "B"], "then": "X"}, {"if": ["A", "C"], "then": "Y"}]
        }"#,
    );
    let kb = load(file.path());

    let facts = select_facts(&kb, ["1"]).unwrap();
    assert_eq!(
        render_result(&infer(&kb, &facts)),
        "Inference Result:\nPossibility: X (Match-degree: 50%)\nPossibility: Y (Match-degree: 50%)"
    );

    assert!(matches!(
        select_facts(&kb, Vec::<&str>::new()),
        Err(Error::EmptySelection)
    ));
}
