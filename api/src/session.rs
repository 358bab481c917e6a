//! Persisted session token.
//!
//! A single opaque bearer token under one storage key. There is no expiry
//! tracking: a stale token is only discovered when the backend rejects a
//! request.

use std::sync::{Arc, Mutex};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Single read/write/clear contract for the persisted session token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// TokenStore backed by `window.localStorage`, surviving page reloads and
/// scoped to the browser profile.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Platform-appropriate token store: localStorage on the web, a shared
/// in-memory store elsewhere.
pub fn make_store() -> impl TokenStore {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        static STORE: OnceLock<MemoryStore> = OnceLock::new();
        STORE.get_or_init(MemoryStore::new).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set("tok-123");
        assert_eq!(store.get(), Some("tok-123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clones_share_the_same_token() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared");
        assert_eq!(other.get(), Some("shared".to_string()));
    }
}
