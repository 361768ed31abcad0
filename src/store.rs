//! Key-value persistence for the page preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly two string values. [`PrefStore`] is the seam
//! between the preference rules in [`crate::prefs`] and the browser's
//! `localStorage`, so the rules can be exercised without a browser.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` can be missing or throw (private browsing, sandboxed
//! frames, quota). The page then keeps working for the current visit with a
//! [`MemoryStore`]; preferences simply do not survive a reload.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PageError;

/// Minimal string key-value store.
pub trait PrefStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the backend rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
        Self { entries: RefCell::new(map) }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<T: PrefStore + ?Sized> PrefStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        (**self).set(key, value)
    }
}

/// Read `key`, treating a failing backend as "nothing stored".
pub fn read_or_none(store: &dyn PrefStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("folio: cannot read `{key}`: {e}");
            None
        }
    }
}

/// Write `key`, logging instead of failing when the backend refuses.
pub fn write_or_warn(store: &dyn PrefStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("folio: cannot persist `{key}`: {e}");
    }
}

#[cfg(feature = "browser")]
pub use local::LocalStore;

#[cfg(feature = "browser")]
mod local {
    use super::PrefStore;
    use crate::error::{PageError, describe_js};

    /// Store backed by `window.localStorage`.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        /// Open the window's `localStorage`.
        ///
        /// # Errors
        ///
        /// Returns [`PageError::Storage`] when access throws or storage is
        /// disabled for this origin.
        pub fn open(window: &web_sys::Window) -> Result<Self, PageError> {
            match window.local_storage() {
                Ok(Some(storage)) => Ok(Self { storage }),
                Ok(None) => Err(PageError::Storage("localStorage is disabled".to_owned())),
                Err(e) => Err(PageError::Storage(describe_js(&e))),
            }
        }
    }

    impl PrefStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>, PageError> {
            self.storage
                .get_item(key)
                .map_err(|e| PageError::Storage(describe_js(&e)))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| PageError::Storage(describe_js(&e)))
        }
    }
}
