use super::*;

#[test]
fn memory_storage_get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("access_token"), Ok(None));
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("access_token", "abc").unwrap();
    assert_eq!(storage.get("access_token"), Ok(Some("abc".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_overwrites_existing_value() {
    let storage = MemoryStorage::with_entries([("access_token", "old")]);
    storage.set("access_token", "new").unwrap();
    assert_eq!(storage.get("access_token"), Ok(Some("new".to_owned())));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::with_entries([("refresh_token", "xyz")]);
    storage.remove("refresh_token").unwrap();
    storage.remove("refresh_token").unwrap();
    assert_eq!(storage.get("refresh_token"), Ok(None));
}

#[test]
fn boxed_storage_delegates_to_inner() {
    let storage: Box<dyn TokenStorage> = Box::new(MemoryStorage::new());
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("v".to_owned())));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k"), Ok(None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_the_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("k"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "access_token".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write access_token: QuotaExceededError");
}
