use shared::{Error, PersistedState, Result, StateStorage};
use web_sys::Storage;

use crate::config::CONFIG;

/// `window.localStorage`, holding the persisted subset as one JSON entry.
pub struct BrowserStorage {
    key: &'static str,
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self { key: CONFIG.storage_key }
    }
}

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .ok_or_else(|| Error::storage("Local storage unavailable", "no window"))?
        .local_storage()
        .map_err(|e| Error::storage("Local storage unavailable", format!("{:?}", e)))?
        .ok_or_else(|| Error::storage("Local storage unavailable", "storage disabled"))
}

impl StateStorage for BrowserStorage {
    fn load(&self) -> Result<Option<PersistedState>> {
        let raw = local_storage()?
            .get_item(self.key)
            .map_err(|e| Error::storage("Failed to read store", format!("{:?}", e)))?;
        raw.as_deref().map(PersistedState::from_json).transpose()
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        local_storage()?
            .set_item(self.key, &state.to_json()?)
            .map_err(|e| Error::storage("Failed to write store", format!("{:?}", e)))
    }
}
