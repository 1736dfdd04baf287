//! Snapshot Repository
//!
//! Maps a [`MenuSnapshot`] onto three independent JSON values in a
//! [`KeyValueStore`]. Reads are read-repair: a missing, unreadable or
//! malformed value degrades to its default and never fails the load.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::traits::KeyValueStore;
use crate::catalog;
use crate::domain::{CategoryImages, DomainError, DomainResult, MenuItem, MenuSnapshot};

/// Keys under which the snapshot parts are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub items: String,
    pub categories: String,
    pub category_images: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            items: "cafe_menu_items".to_string(),
            categories: "cafe_categories".to_string(),
            category_images: "cafe_category_images".to_string(),
        }
    }
}

/// Persists menu snapshots into a key/value store
#[derive(Debug, Clone)]
pub struct SnapshotRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load each part independently, falling back to the catalog defaults
    pub fn load(&self) -> MenuSnapshot {
        let items: Vec<MenuItem> = self.read_or_default(&self.keys.items, catalog::default_items);
        let categories: Vec<String> =
            self.read_or_default(&self.keys.categories, catalog::default_categories);
        let category_images: CategoryImages =
            self.read_or_default(&self.keys.category_images, CategoryImages::new);

        MenuSnapshot {
            items,
            categories: dedup_in_order(categories),
            category_images,
        }
    }

    /// Write all three parts
    pub fn save(&mut self, snapshot: &MenuSnapshot) -> DomainResult<()> {
        self.save_items(&snapshot.items)?;
        self.save_categories(&snapshot.categories)?;
        self.save_category_images(&snapshot.category_images)
    }

    pub fn save_items(&mut self, items: &[MenuItem]) -> DomainResult<()> {
        let key = self.keys.items.clone();
        self.write(&key, &items)
    }

    pub fn save_categories(&mut self, categories: &[String]) -> DomainResult<()> {
        let key = self.keys.categories.clone();
        self.write(&key, &categories)
    }

    pub fn save_category_images(&mut self, images: &CategoryImages) -> DomainResult<()> {
        let key = self.keys.category_images.clone();
        self.write(&key, images)
    }

    /// Erase every persisted part
    pub fn clear(&mut self) -> DomainResult<()> {
        let StorageKeys { items, categories, category_images } = self.keys.clone();
        self.store.remove(&items)?;
        self.store.remove(&categories)?;
        self.store.remove(&category_images)
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| DomainError::Storage(format!("Failed to encode {}: {}", key, e)))?;
        self.store.set(key, &json)?;
        debug!(key, bytes = json.len(), "Persisted menu data");
        Ok(())
    }

    fn read_or_default<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "Stored menu data is malformed, using defaults");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read menu data, using defaults");
                default()
            }
        }
    }
}

fn dedup_in_order(values: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
