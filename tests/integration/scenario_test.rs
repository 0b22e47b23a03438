// tests/integration/scenario_test.rs

//! End-to-end flows against the in-memory document store.

use super::test_helpers::InMemoryJsonStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use spineljson::{AsyncJsonClient, JsonClient, RespValue, SerdeJsonSerializer, SetOptions};
use std::sync::Arc;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Moon {
    value: String,
}

fn client(store: &InMemoryJsonStore) -> JsonClient<&InMemoryJsonStore> {
    JsonClient::with_serializer(store, Arc::new(SerdeJsonSerializer))
}

#[test]
fn test_set_then_get_nested_path() {
    let store = InMemoryJsonStore::new();
    let client = client(&store);

    let doc = json!({"hello": "world", "goodnight": {"value": "moon"}});
    let result = client.set("k", None, &doc, SetOptions::default()).unwrap();
    assert!(result.is_success());

    let reply = client.get("k", &[".goodnight"]).unwrap();
    assert_eq!(reply.to_text().unwrap(), r#"{"value":"moon"}"#);

    let moon = client
        .get_as::<Moon>("k", &[".goodnight"])
        .unwrap()
        .single()
        .unwrap();
    assert_eq!(moon.value, "moon");
}

#[test]
fn test_arr_append_on_empty_array() {
    let store = InMemoryJsonStore::new();
    let client = client(&store);

    client
        .set("k", None, &json!({"array": []}), SetOptions::default())
        .unwrap();
    let len = client.arr_append("k", Some(".array"), &["hello", "world"]).unwrap();
    assert_eq!(len, 2);

    let reply = client.get("k", &[".array"]).unwrap();
    assert_eq!(reply.to_text().unwrap(), r#"["hello","world"]"#);
}

#[test]
fn test_nx_set_on_existing_key_is_not_successful() {
    let store = InMemoryJsonStore::new();
    let client = client(&store);

    assert!(
        client
            .set("k", None, &json!(1), SetOptions::if_not_exists())
            .unwrap()
            .is_success()
    );
    let second = client
        .set("k", None, &json!(2), SetOptions::if_not_exists())
        .unwrap();
    assert!(!second.is_success());
}

#[test]
fn test_delete_then_get_is_null() {
    let store = InMemoryJsonStore::new();
    let client = client(&store);

    client.set("k", None, &json!({"a": 1}), SetOptions::default()).unwrap();
    assert_eq!(client.del("k", None).unwrap(), 1);
    assert_eq!(client.get("k", &[]).unwrap(), RespValue::Null);
    assert!(client.get_as::<Moon>("k", &[]).unwrap().is_empty().unwrap());
}

#[tokio::test]
async fn test_async_scenario_matches_blocking() {
    let store = InMemoryJsonStore::new();
    let client = AsyncJsonClient::with_serializer(&store, Arc::new(SerdeJsonSerializer));

    let doc = json!({"hello": "world", "goodnight": {"value": "moon"}});
    client
        .set("k", None, &doc, SetOptions::default())
        .await
        .unwrap();
    let reply = client.get("k", &[".goodnight"]).await.unwrap();
    assert_eq!(reply.to_text().unwrap(), r#"{"value":"moon"}"#);
}
