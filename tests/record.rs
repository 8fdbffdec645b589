use std::io::Write;

use secret_recovery::RecoveryError;
use secret_recovery::record::{ShareEntry, TestCase};

const SAMPLE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

#[test]
fn parses_sample_record() {
    let case: TestCase = SAMPLE.parse().unwrap();

    assert_eq!(case.n(), 4);
    assert_eq!(case.k(), 3);
    assert_eq!(case.share(2), Some(&ShareEntry::new("2", "111")));

    // index 6 is beyond n = 4
    let indices: Vec<u64> = case.shares().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn shares_are_ordered_numerically() {
    let case: TestCase = r#"{
        "10": { "base": "10", "value": "1" },
        "keys": { "n": 10, "k": 2 },
        "9": { "base": "10", "value": "1" },
        "2": { "base": "10", "value": "1" }
    }"#
    .parse()
    .unwrap();

    let indices: Vec<u64> = case.shares().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![2, 9, 10]);
}

#[test]
fn accepts_counts_as_strings() {
    let case: TestCase = r#"{ "keys": { "n": "3", "k": "2" } }"#.parse().unwrap();

    assert_eq!((case.n(), case.k()), (3, 2));
}

#[test]
fn accepts_integral_float_counts() {
    let case: TestCase = r#"{ "keys": { "n": 4.0, "k": 3 } }"#.parse().unwrap();

    assert_eq!((case.n(), case.k()), (4, 3));
}

#[test]
fn rejects_fractional_counts() {
    let result: Result<TestCase, _> = r#"{ "keys": { "n": 4.5, "k": 3 } }"#.parse();

    assert!(matches!(result, Err(RecoveryError::MalformedRecord(_))));
}

#[test]
fn rejects_duplicate_share_keys() {
    let result: Result<TestCase, _> = r#"{
        "keys": { "n": 1, "k": 1 },
        "1": { "base": "10", "value": "5" },
        "1": { "base": "10", "value": "7" }
    }"#
    .parse();

    match result {
        Err(RecoveryError::MalformedRecord(message)) => {
            assert!(message.contains("duplicate key \"1\""), "{message}")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn rejects_duplicate_keys_object() {
    let result: Result<TestCase, _> =
        r#"{ "keys": { "n": 1, "k": 1 }, "keys": { "n": 2, "k": 1 } }"#.parse();

    assert!(matches!(result, Err(RecoveryError::MalformedRecord(_))));
}

#[test]
fn ignores_non_canonical_keys() {
    let case: TestCase = r#"{
        "keys": { "n": 3, "k": 1 },
        "01": { "base": "10", "value": "1" },
        "0": { "base": "10", "value": "1" },
        "comment": "not a share",
        "3": { "base": "10", "value": "5" }
    }"#
    .parse()
    .unwrap();

    let indices: Vec<u64> = case.shares().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![3]);
}

#[test]
fn rejects_missing_keys() {
    let result: Result<TestCase, _> = r#"{ "1": { "base": "10", "value": "4" } }"#.parse();

    assert!(matches!(result, Err(RecoveryError::MalformedRecord(_))));
}

#[test]
fn rejects_missing_threshold() {
    let result: Result<TestCase, _> = r#"{ "keys": { "n": 4 } }"#.parse();

    match result {
        Err(RecoveryError::MalformedRecord(message)) => assert!(message.contains("missing field `k`")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn rejects_negative_counts() {
    let result: Result<TestCase, _> = r#"{ "keys": { "n": -4, "k": 3 } }"#.parse();

    assert!(matches!(result, Err(RecoveryError::MalformedRecord(_))));
}

#[test]
fn rejects_incomplete_share_entry() {
    let result: Result<TestCase, _> = r#"{
        "keys": { "n": 2, "k": 1 },
        "2": { "base": "10" }
    }"#
    .parse();

    match result {
        Err(RecoveryError::MalformedRecord(message)) => assert!(message.contains("share 2")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn rejects_non_object_documents() {
    for doc in ["[]", "42", "\"keys\"", "{ not json"] {
        let result: Result<TestCase, _> = doc.parse();
        assert!(
            matches!(result, Err(RecoveryError::MalformedRecord(_))),
            "document {doc:?}"
        );
    }
}

#[test]
fn reads_record_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let case = TestCase::from_path(file.path()).unwrap();

    assert_eq!(case, SAMPLE.parse::<TestCase>().unwrap());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = TestCase::from_path(&path).unwrap_err();

    assert!(matches!(err, RecoveryError::MissingSource { .. }));
    assert!(err.to_string().contains("absent.json"));
}
