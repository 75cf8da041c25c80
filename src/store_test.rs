use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("gb_theme"), None);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set("gb_theme", "light").unwrap();
    assert_eq!(store.get("gb_theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let mut store = MemoryStore::with("gb_theme", "dark");
    store.set("gb_theme", "light").unwrap();
    assert_eq!(store.get("gb_theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::with("gb_theme", "dark");
    assert_eq!(store.get("other"), None);
}
