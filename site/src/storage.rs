//! `localStorage`-backed preference store.

use page::theme::{MemoryStore, PreferenceStore};
use web_sys::{Storage, Window};

/// Browser storage, or an in-memory stand-in when `localStorage` is blocked
/// (privacy mode, sandboxed iframes).
pub(crate) enum Store {
    Local(Storage),
    Memory(MemoryStore),
}

impl Store {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme choice will not persist");
                Self::Memory(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("localStorage blocked ({err:?}); theme choice will not persist");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for Store {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).unwrap_or_else(|err| {
                log::warn!("reading {key} failed: {err:?}");
                None
            }),
            Self::Memory(store) => store.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("writing {key} failed: {err:?}");
                }
            }
            Self::Memory(store) => store.save(key, value),
        }
    }
}
