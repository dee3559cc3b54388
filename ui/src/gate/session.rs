//! Persisted "already logged in" flag.
//!
//! One key, value `"true"` or `"false"`. A missing key or anything else reads
//! as not authenticated.

use std::sync::{Arc, Mutex};

/// Storage key shared with earlier builds of the portal
pub const SESSION_KEY: &str = "easyGP_auth";

pub trait SessionStore {
    /// Read the flag. Absent or unreadable means `false`.
    fn load(&self) -> bool;
    fn save(&self, authenticated: bool);
    fn clear(&self);
}

fn encode(authenticated: bool) -> &'static str {
    if authenticated { "true" } else { "false" }
}

fn decode(raw: Option<&str>) -> bool {
    matches!(raw, Some("true"))
}

/// In-memory store. Clones share the same slot, so a fresh `Gate` built
/// from a clone behaves like a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.to_owned()))),
        }
    }

    /// The raw persisted value, as it would appear in the browser
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> bool {
        decode(self.raw().as_deref())
    }

    fn save(&self, authenticated: bool) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(encode(authenticated).to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

#[cfg(feature = "web")]
pub use browser::BrowserStore;

#[cfg(feature = "web")]
mod browser {
    use leptos::leptos_dom::logging::console_warn;
    use web_sys::Storage;

    use super::{SESSION_KEY, SessionStore, decode, encode};

    /// `window.localStorage`, survives reloads but stays on this profile
    #[derive(Clone, Copy, Debug)]
    pub struct BrowserStore {
        key: &'static str,
    }

    impl Default for BrowserStore {
        fn default() -> Self {
            Self { key: SESSION_KEY }
        }
    }

    impl BrowserStore {
        fn storage(&self) -> Option<Storage> {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                console_warn("localStorage unavailable; session will not persist");
            }
            storage
        }
    }

    impl SessionStore for BrowserStore {
        fn load(&self) -> bool {
            let Some(storage) = self.storage() else {
                return false;
            };
            match storage.get_item(self.key) {
                Ok(raw) => decode(raw.as_deref()),
                Err(_) => {
                    console_warn("could not read session flag");
                    false
                }
            }
        }

        fn save(&self, authenticated: bool) {
            if let Some(storage) = self.storage() {
                if storage.set_item(self.key, encode(authenticated)).is_err() {
                    console_warn("could not write session flag");
                }
            }
        }

        fn clear(&self) {
            if let Some(storage) = self.storage() {
                if storage.remove_item(self.key).is_err() {
                    console_warn("could not clear session flag");
                }
            }
        }
    }
}
