use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryTokenStore::default();
    store.set("abc.def.ghi");
    assert_eq!(store.get().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new");
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("abc");
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_get_is_repeatable() {
    let store = MemoryTokenStore::with_token("abc");
    assert_eq!(store.get(), store.get());
    assert_eq!(store.get().as_deref(), Some("abc"));
}

// =============================================================
// bearer
// =============================================================

#[test]
fn bearer_treats_empty_token_as_absent() {
    let store = MemoryTokenStore::with_token("");
    assert_eq!(store.get().as_deref(), Some(""));
    assert!(store.bearer().is_none());
}

#[test]
fn bearer_returns_stored_token() {
    let store = MemoryTokenStore::with_token("t");
    assert_eq!(store.bearer().as_deref(), Some("t"));
}

// =============================================================
// LocalStorageTokenStore (non-browser build)
// =============================================================

#[test]
fn local_storage_store_keeps_key() {
    let store = LocalStorageTokenStore::new("jwtToken");
    assert_eq!(store.key(), "jwtToken");
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_empty_outside_browser() {
    let store = LocalStorageTokenStore::new("jwtToken");
    store.set("abc");
    assert!(store.get().is_none());
    store.clear();
}
