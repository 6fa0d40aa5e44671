//! # Browser localStorage backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used by the **web platform**. It
//! reads and writes the window's `localStorage` through `web-sys`.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage`
//! on every call. `web_sys::Storage` is not `Send` and cannot live in a
//! Dioxus context that outlives the page, and the lookup is a cheap property
//! read.
//!
//! ## Error handling
//!
//! Every method silently swallows errors. Reads return `None` and writes do
//! nothing. Private browsing modes and disabled storage degrade to "no
//! session" and the default theme rather than crashing the page.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }
}
