// tests/integration/array_commands_test.rs

//! Integration tests for array commands
//! Tests: JSON.ARRAPPEND, JSON.ARRINDEX, JSON.ARRINSERT, JSON.ARRLEN, JSON.ARRPOP,
//! JSON.ARRTRIM

use super::test_helpers::{RecordingExecutor, bulk, recording_client};
use spineljson::{RespValue, SpinelJsonError};

// ===== JSON.ARRAPPEND Tests =====

#[test]
fn test_arr_append_serializes_each_value() {
    let exec = RecordingExecutor::replying(RespValue::Integer(3));
    let client = recording_client(&exec);

    let len = client.arr_append("doc", Some(".list"), &[1, 2]).unwrap();
    assert_eq!(len, 3);
    assert_eq!(
        exec.last_call(),
        vec!["JSON.ARRAPPEND", "doc", ".list", "1", "2"]
    );
}

#[test]
fn test_arr_append_strings_are_quoted() {
    let exec = RecordingExecutor::replying(RespValue::Integer(2));
    let client = recording_client(&exec);

    client.arr_append("doc", None, &["x", "y"]).unwrap();
    assert_eq!(
        exec.last_call(),
        vec!["JSON.ARRAPPEND", "doc", ".", "\"x\"", "\"y\""]
    );
}

#[test]
fn test_arr_append_without_values_is_rejected() {
    let exec = RecordingExecutor::new();
    let client = recording_client(&exec);

    let values: [i64; 0] = [];
    let err = client.arr_append("doc", None, &values).unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}

// ===== JSON.ARRINDEX Tests =====

#[test]
fn test_arr_index_defaults_bounds_to_zero() {
    let exec = RecordingExecutor::replying(RespValue::Integer(-1));
    let client = recording_client(&exec);

    assert_eq!(client.arr_index("doc", None, "x", None, None).unwrap(), -1);
    assert_eq!(
        exec.last_call(),
        vec!["JSON.ARRINDEX", "doc", ".", "\"x\"", "0", "0"]
    );
}

#[test]
fn test_arr_index_with_range() {
    let exec = RecordingExecutor::replying(RespValue::Integer(2));
    let client = recording_client(&exec);

    client
        .arr_index("doc", Some(".n"), &7, Some(1), Some(-1))
        .unwrap();
    assert_eq!(
        exec.last_call(),
        vec!["JSON.ARRINDEX", "doc", ".n", "7", "1", "-1"]
    );
}

// ===== JSON.ARRINSERT Tests =====

#[test]
fn test_arr_insert_places_index_before_values() {
    let exec = RecordingExecutor::replying(RespValue::Integer(4));
    let client = recording_client(&exec);

    client.arr_insert("doc", Some(".a"), -2, &[true, false]).unwrap();
    assert_eq!(
        exec.last_call(),
        vec!["JSON.ARRINSERT", "doc", ".a", "-2", "true", "false"]
    );
}

// ===== JSON.ARRLEN Tests =====

#[test]
fn test_arr_len_reads_integer() {
    let exec = RecordingExecutor::replying(RespValue::Integer(5));
    let client = recording_client(&exec);

    assert_eq!(client.arr_len("doc", Some(".a")).unwrap(), Some(5));
    assert_eq!(exec.last_call(), vec!["JSON.ARRLEN", "doc", ".a"]);
}

// ===== JSON.ARRPOP Tests =====

#[test]
fn test_arr_pop_defaults_to_last_element() {
    let exec = RecordingExecutor::replying(bulk("3"));
    let client = recording_client(&exec);

    assert_eq!(client.arr_pop("doc", None, None).unwrap(), bulk("3"));
    assert_eq!(exec.last_call(), vec!["JSON.ARRPOP", "doc", ".", "-1"]);
}

#[test]
fn test_arr_pop_as_decodes_value() {
    let exec = RecordingExecutor::replying(bulk("\"moon\""));
    let client = recording_client(&exec);

    let popped: Option<String> = client.arr_pop_as("doc", Some(".a"), Some(0)).unwrap();
    assert_eq!(popped.as_deref(), Some("moon"));
    assert_eq!(exec.last_call(), vec!["JSON.ARRPOP", "doc", ".a", "0"]);
}

#[test]
fn test_arr_pop_as_empty_array_is_none() {
    let exec = RecordingExecutor::replying(RespValue::Null);
    let client = recording_client(&exec);

    let popped: Option<i64> = client.arr_pop_as("doc", None, None).unwrap();
    assert!(popped.is_none());
}

// ===== JSON.ARRTRIM Tests =====

#[test]
fn test_arr_trim_sends_inclusive_range() {
    let exec = RecordingExecutor::replying(RespValue::Integer(2));
    let client = recording_client(&exec);

    assert_eq!(client.arr_trim("doc", Some(".a"), 1, 2).unwrap(), 2);
    assert_eq!(exec.last_call(), vec!["JSON.ARRTRIM", "doc", ".a", "1", "2"]);
}
