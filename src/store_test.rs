use super::*;

/// Backend that rejects every call, like `localStorage` in a locked-down frame.
struct BrokenStore;

impl PrefStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PageError> {
        Err(PageError::Storage("denied".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::Storage("denied".to_owned()))
    }
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("fp-theme").expect("memory get"), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("fp-theme", "dark").expect("memory set");
    assert_eq!(store.get("fp-theme").expect("memory get").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_overwrites() {
    let store = MemoryStore::with_entries([("fp-anim", "on")]);
    store.set("fp-anim", "off").expect("memory set");
    assert_eq!(store.get("fp-anim").expect("memory get").as_deref(), Some("off"));
    assert_eq!(store.len(), 1);
}

#[test]
fn read_or_none_swallows_backend_errors() {
    assert_eq!(read_or_none(&BrokenStore, "fp-theme"), None);
}

#[test]
fn read_or_none_passes_values_through() {
    let store = MemoryStore::with_entries([("fp-theme", "light")]);
    assert_eq!(read_or_none(&store, "fp-theme").as_deref(), Some("light"));
}

#[test]
fn write_or_warn_tolerates_backend_errors() {
    write_or_warn(&BrokenStore, "fp-theme", "dark");

    let store = MemoryStore::new();
    write_or_warn(&store, "fp-theme", "dark");
    assert_eq!(read_or_none(&store, "fp-theme").as_deref(), Some("dark"));
}
