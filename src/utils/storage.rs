// ============================================================================
// STORAGE - localStorage (gloo-storage) + alternativa en memoria
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;
use crate::models::User;
use crate::utils::constants::USER_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Error guardando en localStorage: {0}")]
    Write(String),
    #[error("Error serializando datos: {0}")]
    Serialize(String),
}

/// Almacenamiento clave/valor persistente (el `localStorage` del navegador)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

pub fn save_to_storage<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(key, &json)
}

/// Usuario de la sesión. Acepta también el JSON doblemente codificado
/// (`"\"{...}\""`) que dejaban versiones anteriores.
pub fn load_user(storage: &dyn KeyValueStorage) -> Option<User> {
    let json = storage.get_item(USER_STORAGE_KEY)?;
    if let Ok(user) = serde_json::from_str::<User>(&json) {
        return Some(user);
    }
    let inner = serde_json::from_str::<String>(&json).ok()?;
    serde_json::from_str(&inner).ok()
}
