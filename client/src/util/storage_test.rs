use super::*;

#[test]
fn memory_store_put_json_writes_serialized_value() {
    let mut store = MemoryStore::default();
    store
        .put_json("product_AGR-1", &serde_json::json!({ "status": "Retailer Updated" }))
        .expect("write");
    assert_eq!(store.entries["product_AGR-1"], r#"{"status":"Retailer Updated"}"#);
}

#[test]
fn memory_store_put_replaces_previous_value() {
    let mut store = MemoryStore::default();
    store.put("k", "one").expect("write");
    store.put("k", "two").expect("write");
    assert_eq!(store.entries.len(), 1);
    assert_eq!(store.entries["k"], "two");
}

#[test]
fn failing_write_reports_message() {
    let mut store = MemoryStore { fail_writes: true, ..MemoryStore::default() };
    let err = store.put("k", "v").expect_err("should fail");
    assert_eq!(err.to_string(), "Could not save record: quota exceeded");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_unavailable_off_browser() {
    let err = LocalStorage.put("k", "v").expect_err("no browser");
    assert!(matches!(err, StorageError::Unavailable));
}
