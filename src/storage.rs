//! Browser Storage
//!
//! `localStorage`-backed key/value store. Data stays on this device only.

use menu_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// Handle to the page's `localStorage`
///
/// Holds no browser object itself, so it can live inside reactive state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> DomainResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| DomainError::Storage("No window available".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
}

fn js_error(value: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", value))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
