//! Bearer token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller reads the token before every authorized request and is the
//! only writer. The browser store keeps the raw string in `localStorage`;
//! nothing about the token is checked here.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;

/// Single-slot token storage.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    /// Token suitable for a request header. An empty string counts as absent.
    fn bearer(&self) -> Option<String> {
        self.get().filter(|token| !token.is_empty())
    }
}

/// In-process store, used when no browser storage is available.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// `window.localStorage` under a fixed key. Outside the browser every read
/// is empty and every write is dropped.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("localStorage rejected write for {}", self.key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
