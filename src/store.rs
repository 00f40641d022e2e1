//! Persistence Adapter
//!
//! Per-item completion flags in `localStorage`, namespaced under a fixed
//! prefix. Storage failure (quota, disabled storage, private browsing) is
//! never fatal: callers take the `false` branch on a failed read and drop
//! failed writes.

/// Namespace prefix for completion entries
pub const STORE_PREFIX: &str = "a2z:checked:";

/// Value stored for a completed item; absence of the key means not done
const DONE_MARKER: &str = "1";

/// Durable done-flag store, keyed by an item's derived storage key
pub trait DoneStore {
    fn load(&self, key: &str) -> Result<bool, String>;
    fn save(&self, key: &str, done: bool) -> Result<(), String>;
}

/// `localStorage`-backed store used by the running page
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|e| format!("localStorage unavailable: {e:?}"))?
            .ok_or_else(|| "localStorage disabled".to_string())
    }
}

impl DoneStore for LocalStore {
    fn load(&self, key: &str) -> Result<bool, String> {
        let entry = self
            .storage()?
            .get_item(&format!("{STORE_PREFIX}{key}"))
            .map_err(|e| format!("read failed: {e:?}"))?;
        Ok(entry.as_deref() == Some(DONE_MARKER))
    }

    fn save(&self, key: &str, done: bool) -> Result<(), String> {
        let storage = self.storage()?;
        let full_key = format!("{STORE_PREFIX}{key}");
        if done {
            storage
                .set_item(&full_key, DONE_MARKER)
                .map_err(|e| format!("write failed: {e:?}"))
        } else {
            // Absence means not done, so un-toggling removes the entry
            storage
                .remove_item(&full_key)
                .map_err(|e| format!("remove failed: {e:?}"))
        }
    }
}
