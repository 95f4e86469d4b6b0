//! Where the login flow leaves the signed-in user.
//!
//! Browser builds use `localStorage`; everything else keeps it in memory.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use gloo_storage::{LocalStorage, Storage};
use scribe_common::CurrentUser;
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
use std::sync::{LazyLock, Mutex};

/// Storage key holding the user as JSON.
pub const USER_KEY: &str = "scribe_user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored user is not valid: {0}")]
    Invalid(#[from] scribe_common::ScribeError),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UserStore;

#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
static MEMORY: LazyLock<Mutex<Option<String>>> = LazyLock::new(|| Mutex::new(None));

impl UserStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> Result<Option<CurrentUser>, StoreError> {
        match self.read_raw()? {
            Some(json) => Ok(Some(CurrentUser::from_json(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, user: &CurrentUser) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)
            .map_err(|e| StoreError::Invalid(scribe_common::SerDeError::Json(e).into()))?;
        self.write_raw(Some(json))
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.write_raw(None)
    }

    #[cfg(test)]
    pub(crate) fn write_raw_for_test(&self, raw: &str) {
        self.write_raw(Some(raw.to_string())).unwrap();
    }

    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match LocalStorage::raw().get_item(USER_KEY) {
            Ok(value) => Ok(value),
            Err(e) => Err(StoreError::Unavailable(format!("{e:?}"))),
        }
    }

    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    fn write_raw(&self, value: Option<String>) -> Result<(), StoreError> {
        let storage = LocalStorage::raw();
        let result = match value {
            Some(json) => storage.set_item(USER_KEY, &json),
            None => storage.remove_item(USER_KEY),
        };
        result.map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        MEMORY
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    fn write_raw(&self, value: Option<String>) -> Result<(), StoreError> {
        let mut guard = MEMORY
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *guard = value;
        Ok(())
    }
}
