//! `localStorage`-backed preference store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: private browsing or a full quota leaves the
//! previous value in place and logs a warning. Native builds see an empty,
//! write-discarding store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use views::prefs::PreferenceStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write for {key} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
