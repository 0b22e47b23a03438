// tests/integration/async_client_test.rs

//! Integration tests for the asynchronous client
//! The async client builds the same command lines as the blocking one.

use super::test_helpers::{RecordingExecutor, async_recording_client, bulk};
use spineljson::{RespValue, SetOptions, SpinelJsonError};
use std::sync::Arc;

#[tokio::test]
async fn test_async_del_defaults_to_root_path() {
    let exec = RecordingExecutor::replying(RespValue::Integer(1));
    let client = async_recording_client(&exec);

    assert_eq!(client.del("doc", None).await.unwrap(), 1);
    assert_eq!(exec.last_call(), vec!["JSON.DEL", "doc", "."]);
}

#[tokio::test]
async fn test_async_set_and_get_as() {
    let exec = RecordingExecutor::new();
    exec.push_reply(RespValue::SimpleString("OK".into()));
    exec.push_reply(bulk(r#"[1,2,3]"#));
    let client = async_recording_client(&exec);

    let result = client
        .set("doc", Some(".n"), &vec![1, 2, 3], SetOptions::default())
        .await
        .unwrap();
    assert!(result.is_success());

    let values = client.get_as::<i64>("doc", &["$.n[*]"]).await.unwrap();
    assert_eq!(values.into_vec().unwrap(), vec![1, 2, 3]);

    let calls = exec.calls();
    assert_eq!(calls[0], vec!["JSON.SET", "doc", ".n", "[1,2,3]"]);
    assert_eq!(calls[1], vec!["JSON.GET", "doc", "$.n[*]"]);
}

#[tokio::test]
async fn test_async_mget_as_over_shared_executor() {
    let exec = Arc::new(RecordingExecutor::replying(RespValue::Array(vec![
        bulk("1"),
        RespValue::Null,
    ])));
    let client = spineljson::AsyncJsonClient::with_serializer(
        Arc::clone(&exec),
        Arc::new(spineljson::SerdeJsonSerializer),
    );

    let values = client.mget_as::<i64, _>(&["a", "b"], None).await.unwrap();
    assert_eq!(values, vec![Some(1), None]);
    assert_eq!(exec.last_call(), vec!["JSON.MGET", "a", "b", "."]);
}

#[tokio::test]
async fn test_async_arr_len_missing_is_none() {
    let exec = RecordingExecutor::replying(RespValue::Null);
    let client = async_recording_client(&exec);

    assert_eq!(client.arr_len("missing", None).await.unwrap(), None);
}

#[tokio::test]
async fn test_async_error_reply_becomes_server_error() {
    let exec = RecordingExecutor::replying(RespValue::Error("WRONGTYPE not an array".into()));
    let client = async_recording_client(&exec);

    let err = client.arr_pop("doc", None, None).await.unwrap_err();
    assert_eq!(err, SpinelJsonError::Server("WRONGTYPE not an array".into()));
}

#[tokio::test]
async fn test_async_argument_errors_skip_the_executor() {
    let exec = RecordingExecutor::new();
    let client = async_recording_client(&exec);

    let err = client.str_len("", None).await.unwrap_err();
    assert!(matches!(err, SpinelJsonError::InvalidArgument(_)));
    assert!(exec.calls().is_empty());
}
