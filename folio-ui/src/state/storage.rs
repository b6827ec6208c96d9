//! Browser Storage
//!
//! Binds the [`KeyValueStore`] seam to `window.localStorage`. When local
//! storage is unavailable (private mode, disabled cookies) collections fall
//! back to an in-memory store for the lifetime of the page.

use folio::store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Key-value store used by the entry collections
#[derive(Debug)]
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open local storage, or an in-memory fallback
    pub fn open() -> Self {
        let storage = web_sys::window().map(|window| window.local_storage());

        let reason = match storage {
            Some(Ok(Some(storage))) => return BrowserStore::Local(storage),
            Some(Ok(None)) => "not provided by this browser".to_string(),
            Some(Err(e)) => js_error(&e),
            None => "no window".to_string(),
        };

        let err = StoreError::Unavailable(reason);
        web_sys::console::warn_1(&format!("{}; changes will not survive a reload", err).into());
        BrowserStore::Memory(MemoryStore::new())
    }

    /// Whether writes survive a reload
    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStore::Local(_))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StoreError::Backend(js_error(&e))),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(js_error(&e))),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match self {
            BrowserStore::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| StoreError::Backend(js_error(&e))),
            BrowserStore::Memory(store) => store.remove(key),
        }
    }
}

/// Best-effort text for a thrown JS value (e.g. a `QuotaExceededError`)
fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::entries::{BlogForm, BlogPost};
    use folio::store::{EntryCollection, BLOG_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let store = BrowserStore::open();
        assert!(store.is_persistent());

        store.set("folio-test", "[]").unwrap();
        assert_eq!(store.get("folio-test").unwrap().as_deref(), Some("[]"));

        store.remove("folio-test").unwrap();
        assert_eq!(store.get("folio-test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_memory_fallback_is_not_persistent() {
        let store = BrowserStore::Memory(MemoryStore::new());
        assert!(!store.is_persistent());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[wasm_bindgen_test]
    fn test_collection_survives_reopen() {
        BrowserStore::open().remove(BLOG_KEY).unwrap();

        let mut blog: EntryCollection<BlogPost, _> = EntryCollection::load(BrowserStore::open(), BLOG_KEY);
        let form = BlogForm {
            title: "Hello".to_string(),
            date: "2024-01-15".to_string(),
            content: "World".to_string(),
        };
        blog.create(&form).unwrap();

        let reloaded: EntryCollection<BlogPost, _> = EntryCollection::load(BrowserStore::open(), BLOG_KEY);
        assert_eq!(reloaded.entries(), blog.entries());

        BrowserStore::open().remove(BLOG_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_malformed_record_reports_warning() {
        let store = BrowserStore::open();
        store.set(BLOG_KEY, "{not json").unwrap();

        let blog: EntryCollection<BlogPost, _> = EntryCollection::load(BrowserStore::open(), BLOG_KEY);
        assert!(blog.is_empty());
        assert!(blog.load_warning().is_some());

        store.remove(BLOG_KEY).unwrap();
    }
}
