// tests/integration/index_commands_test.rs

//! Integration tests for secondary index commands
//! Tests: JSON.INDEX ADD, JSON.INDEX DEL, JSON.QGET

use super::test_helpers::{RecordingExecutor, bulk, recording_client};
use serde::Deserialize;
use spineljson::{RespValue, SpinelJsonError};

#[derive(Debug, PartialEq, Deserialize)]
struct User {
    name: String,
}

// ===== JSON.INDEX Tests =====

#[test]
fn test_index_add_sends_subcommand_first() {
    let exec = RecordingExecutor::replying(RespValue::SimpleString("OK".into()));
    let client = recording_client(&exec);

    client.index_add("users", "name", Some(".name")).unwrap();
    assert_eq!(
        exec.last_call(),
        vec!["JSON.INDEX", "ADD", "users", "name", ".name"]
    );
}

#[test]
fn test_index_delete() {
    let exec = RecordingExecutor::replying(RespValue::SimpleString("OK".into()));
    let client = recording_client(&exec);

    client.index_delete("users", "name").unwrap();
    assert_eq!(exec.last_call(), vec!["JSON.INDEX", "DEL", "users", "name"]);
}

#[test]
fn test_index_add_without_name_is_rejected() {
    let exec = RecordingExecutor::new();
    let client = recording_client(&exec);

    let err = client.index_add("", "name", None).unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}

#[test]
fn test_index_add_without_field_is_rejected() {
    let exec = RecordingExecutor::new();
    let client = recording_client(&exec);

    // An empty field would otherwise send `ADD users $.name` and shift the path.
    let err = client.index_add("users", "", Some("$.name")).unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}

#[test]
fn test_index_delete_without_field_is_rejected() {
    let exec = RecordingExecutor::new();
    let client = recording_client(&exec);

    let err = client.index_delete("users", "").unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}

// ===== JSON.QGET Tests =====

#[test]
fn test_index_get_without_query_is_rejected() {
    let exec = RecordingExecutor::new();
    let client = recording_client(&exec);

    let err = client.index_get("users", "", Some("$.name")).unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    let err = client
        .index_get_as::<User>("users", "", None)
        .unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}

#[test]
fn test_index_get_sends_query() {
    let exec = RecordingExecutor::replying(bulk("{}"));
    let client = recording_client(&exec);

    client.index_get("users", "@name:(John)", None).unwrap();
    assert_eq!(
        exec.last_call(),
        vec!["JSON.QGET", "users", "@name:(John)", "."]
    );
}

#[test]
fn test_index_get_as_keeps_key_order_and_flattens() {
    let exec = RecordingExecutor::replying(bulk(
        r#"{"user:2":[{"name":"Bob"}],"user:1":[{"name":"Ann"},{"name":"Amy"}]}"#,
    ));
    let client = recording_client(&exec);

    let found = client
        .index_get_as::<User>("users", "@name:(A*|B*)", None)
        .unwrap();
    assert_eq!(found.keys().collect::<Vec<_>>(), vec!["user:2", "user:1"]);
    assert_eq!(found.get("user:1").map(<[User]>::len), Some(2));
    let names: Vec<&str> = found.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Ann", "Amy"]);
}

#[test]
fn test_index_get_as_no_matches_is_empty() {
    let exec = RecordingExecutor::replying(RespValue::Null);
    let client = recording_client(&exec);

    let found = client.index_get_as::<User>("users", "@name:(Z*)", None).unwrap();
    assert!(found.is_empty());
}
