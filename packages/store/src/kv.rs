//! # Key-value storage seam
//!
//! The front end keeps exactly three strings between page loads: the theme and
//! the logged-in user's name and role. Everything that touches them goes
//! through [`KeyValueStore`], so the same session logic runs against the
//! browser's `localStorage` ([`crate::LocalStorage`]) in the web build and
//! against [`crate::MemoryStore`] in tests and native builds.
//!
//! Methods take `&self`: browser storage is a shared handle with interior
//! mutability, and the in-memory store mirrors that with a mutex.

/// Synchronous string storage with whole-store clearing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Remove every key, including ones this crate did not write.
    fn clear(&self);
}
