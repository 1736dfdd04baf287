//! Menu State Manager
//!
//! Owns the in-memory [`MenuSnapshot`] for a session and mirrors every
//! mutation to the device store. There is exactly one writer, so mutations
//! apply to memory first and then persist. A failed write comes back as
//! [`DomainError::Storage`] with memory already changed, so the session keeps
//! working and the caller can tell the owner the change will not survive a
//! reload.

use tracing::{debug, info, warn};

use crate::catalog;
use crate::domain::{
    find_by_id, find_by_id_mut, CategoryImages, DomainError, DomainResult, MenuItem, MenuSnapshot,
    NewMenuItem,
};
use crate::repository::{KeyValueStore, SnapshotRepository};

/// The menu for one device
#[derive(Debug, Clone)]
pub struct MenuState<S> {
    repo: SnapshotRepository<S>,
    snapshot: MenuSnapshot,
}

impl<S: KeyValueStore> MenuState<S> {
    /// Load the persisted menu, or the defaults for anything missing or corrupt
    pub fn load(repo: SnapshotRepository<S>) -> Self {
        let mut snapshot = repo.load();
        let orphans: Vec<String> =
            snapshot.orphan_categories().into_iter().map(str::to_string).collect();
        if !orphans.is_empty() {
            warn!(?orphans, "Items reference unknown categories, restoring them");
            snapshot.categories.extend(orphans);
        }
        info!(
            items = snapshot.items.len(),
            categories = snapshot.categories.len(),
            overrides = snapshot.category_images.len(),
            "Menu loaded"
        );
        Self { repo, snapshot }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.snapshot.items
    }

    pub fn categories(&self) -> &[String] {
        &self.snapshot.categories
    }

    pub fn category_images(&self) -> &CategoryImages {
        &self.snapshot.category_images
    }

    pub fn snapshot(&self) -> &MenuSnapshot {
        &self.snapshot
    }

    pub fn repository(&self) -> &SnapshotRepository<S> {
        &self.repo
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        find_by_id(&self.snapshot.items, id)
    }

    /// Items of one category, in list order
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.snapshot.items.iter().filter(move |item| item.category == category)
    }

    /// Image to show on a category tile
    ///
    /// Override, else the first item's uploaded image, else the first default
    /// item's bundled path, else empty.
    pub fn resolve_image(&self, category: &str) -> &str {
        if let Some(image) = self.snapshot.category_images.get(category) {
            return image;
        }
        if let Some(item) = self.snapshot.items.iter().find(|item| item.category == category) {
            if item.has_embedded_image() {
                return &item.image;
            }
        }
        catalog::default_image_for(category).unwrap_or("")
    }

    /// Append a category
    ///
    /// Returns `Ok(false)` when the trimmed name already exists.
    /// `Err(Storage)` means the category was added but not saved.
    pub fn add_category(&mut self, name: &str) -> DomainResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Category name is required".to_string()));
        }
        if self.snapshot.has_category(name) {
            debug!(category = name, "Category already exists");
            return Ok(false);
        }

        self.snapshot.categories.push(name.to_string());
        debug!(category = name, "Category added");
        self.persist_categories()?;
        Ok(true)
    }

    /// Validate and append a new product
    ///
    /// An unknown category is created first so every item stays reachable.
    pub fn add_item(&mut self, draft: NewMenuItem) -> DomainResult<MenuItem> {
        let item = draft.into_item()?;

        let mut saved = Ok(());
        if !self.snapshot.has_category(&item.category) {
            info!(category = %item.category, "Creating category for new item");
            self.snapshot.categories.push(item.category.clone());
            saved = self.persist_categories();
        }

        self.snapshot.items.push(item.clone());
        debug!(id = %item.id, name = %item.name, "Item added");
        saved.and(self.persist_items())?;
        Ok(item)
    }

    /// Replace one item's image
    pub fn set_item_image(&mut self, id: &str, image: String) -> DomainResult<()> {
        let item = find_by_id_mut(&mut self.snapshot.items, id)
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", id)))?;
        item.image = image;
        debug!(id, "Item image replaced");
        self.persist_items()
    }

    /// Set or replace a category's image override
    pub fn set_category_image(&mut self, category: &str, image: String) -> DomainResult<()> {
        self.snapshot.category_images.insert(category.to_string(), image);
        debug!(category, "Category image replaced");
        self.persist_category_images()
    }

    /// Discard every owner change and erase the stored copy
    ///
    /// Irreversible; the caller confirms with the user first.
    pub fn reset_to_defaults(&mut self) -> DomainResult<()> {
        self.snapshot = catalog::default_snapshot();
        info!("Menu reset to defaults");
        self.repo.clear().inspect_err(|e| {
            warn!(error = %e, "Failed to erase stored menu");
        })
    }

    fn persist_items(&mut self) -> DomainResult<()> {
        self.repo.save_items(&self.snapshot.items).inspect_err(|e| {
            warn!(error = %e, "Failed to persist items");
        })
    }

    fn persist_categories(&mut self) -> DomainResult<()> {
        self.repo.save_categories(&self.snapshot.categories).inspect_err(|e| {
            warn!(error = %e, "Failed to persist categories");
        })
    }

    fn persist_category_images(&mut self) -> DomainResult<()> {
        self.repo
            .save_category_images(&self.snapshot.category_images)
            .inspect_err(|e| {
                warn!(error = %e, "Failed to persist category images");
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::catalog::{BROWNIES, DEFAULT_CATEGORIES, HOT_BREW, WAFFLES};
    use crate::config::MenuConfig;
    use crate::images::ingest_image;
    use crate::repository::{MemoryStore, StorageKeys};

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn fresh() -> MenuState<MemoryStore> {
        MenuState::load(SnapshotRepository::new(MemoryStore::new()))
    }

    fn reload(menu: MenuState<MemoryStore>) -> MenuState<MemoryStore> {
        let store = menu.repo.into_store();
        MenuState::load(SnapshotRepository::new(store))
    }

    /// Rejects writes once keys plus values exceed `quota` characters,
    /// like the browser's `localStorage`
    #[derive(Debug, Clone, Default)]
    struct QuotaStore {
        entries: HashMap<String, String>,
        quota: usize,
    }

    impl QuotaStore {
        fn new(quota: usize) -> Self {
            Self { quota, ..Default::default() }
        }
    }

    impl KeyValueStore for QuotaStore {
        fn get(&self, key: &str) -> DomainResult<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
            let others: usize = self
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.chars().count() + v.chars().count())
                .sum();
            if others + key.chars().count() + value.chars().count() > self.quota {
                return Err(DomainError::Storage(format!("Quota exceeded writing {}", key)));
            }
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&mut self, key: &str) -> DomainResult<()> {
            self.entries.remove(key);
            Ok(())
        }
    }

    const BROWSER_QUOTA: usize = 5_000_000;

    fn with_quota() -> MenuState<QuotaStore> {
        MenuState::load(SnapshotRepository::new(QuotaStore::new(BROWSER_QUOTA)))
    }

    fn reload_quota(menu: MenuState<QuotaStore>) -> MenuState<QuotaStore> {
        MenuState::load(SnapshotRepository::new(menu.repo.into_store()))
    }

    fn draft(name: &str, price: &str, category: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_load_uses_defaults() {
        let menu = fresh();
        assert_eq!(menu.items(), catalog::default_items().as_slice());
        assert_eq!(menu.categories().len(), DEFAULT_CATEGORIES.len());
        assert!(menu.category_images().is_empty());
    }

    #[test]
    fn test_items_in_category() {
        let menu = fresh();
        let names: Vec<_> = menu.items_in(WAFFLES).map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Nutella Overload", "Red Velvet"]);
        assert_eq!(menu.items_in("Burgers").count(), 0);
    }

    #[test]
    fn test_add_category_trims_and_is_idempotent() {
        let mut menu = fresh();
        assert_eq!(menu.add_category("  Burgers "), Ok(true));
        assert_eq!(menu.add_category("Burgers"), Ok(false));
        assert_eq!(menu.add_category("Burgers  "), Ok(false));

        let count = menu.categories().iter().filter(|c| *c == "Burgers").count();
        assert_eq!(count, 1);
        assert_eq!(menu.categories().last().map(String::as_str), Some("Burgers"));
    }

    #[test]
    fn test_add_category_rejects_blank() {
        let mut menu = fresh();
        let before = menu.categories().to_vec();
        assert!(matches!(menu.add_category("   "), Err(DomainError::InvalidInput(_))));
        assert_eq!(menu.categories(), before.as_slice());
    }

    #[test]
    fn test_add_item_appends_and_persists() {
        let mut menu = fresh();
        let added = menu.add_item(draft("Affogato", "160", HOT_BREW)).unwrap();
        assert_eq!(menu.items().last(), Some(&added));

        let menu = reload(menu);
        assert_eq!(menu.item(&added.id), Some(&added));
        assert_eq!(menu.items().len(), catalog::default_items().len() + 1);
    }

    #[test]
    fn test_add_item_creates_unknown_category() {
        let mut menu = fresh();
        menu.add_item(draft("Smash Burger", "250", "Burgers")).unwrap();
        assert!(menu.categories().iter().any(|c| c == "Burgers"));
        assert!(menu.snapshot().orphan_categories().is_empty());
    }

    #[test]
    fn test_add_item_rejects_invalid_draft() {
        let mut menu = fresh();
        assert!(menu.add_item(draft("", "10", WAFFLES)).is_err());
        assert!(menu.add_item(draft("Tea", "", WAFFLES)).is_err());
        assert_eq!(menu.items().len(), catalog::default_items().len());
    }

    #[test]
    fn test_set_item_image() {
        let mut menu = fresh();
        menu.set_item_image("3", PNG.to_string()).unwrap();
        assert_eq!(menu.item("3").unwrap().image, PNG);

        let err = menu.set_item_image("missing", PNG.to_string());
        assert!(matches!(err, Err(DomainError::NotFound(_))));

        let menu = reload(menu);
        assert_eq!(menu.item("3").unwrap().image, PNG);
    }

    #[test]
    fn test_resolve_image_fallback_chain() {
        let mut menu = fresh();

        // bundled path from the default catalog
        assert_eq!(menu.resolve_image(WAFFLES), "images/waffel.jpg");

        // first item's uploaded image wins over the bundled path
        menu.set_item_image("3", PNG.to_string()).unwrap();
        assert_eq!(menu.resolve_image(WAFFLES), PNG);

        // explicit override wins over everything
        menu.set_category_image(WAFFLES, "data:image/jpeg;base64,AAAA".to_string()).unwrap();
        assert_eq!(menu.resolve_image(WAFFLES), "data:image/jpeg;base64,AAAA");

        // a new category with no items and no override has nothing to show
        menu.add_category("Burgers").unwrap();
        assert_eq!(menu.resolve_image("Burgers"), "");
    }

    #[test]
    fn test_resolve_image_ignores_non_first_uploads() {
        let mut menu = fresh();
        menu.set_item_image("10", PNG.to_string()).unwrap();
        assert_eq!(menu.resolve_image(BROWNIES), "images/brownie.jpg");
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut menu = fresh();
        menu.add_category("Burgers").unwrap();
        menu.add_item(draft("Smash Burger", "250", "Burgers")).unwrap();
        menu.set_item_image("1", PNG.to_string()).unwrap();
        menu.set_category_image(WAFFLES, PNG.to_string()).unwrap();

        menu.reset_to_defaults().unwrap();
        assert_eq!(menu.snapshot(), &catalog::default_snapshot());
        assert!(menu.repository().store().is_empty());

        let menu = reload(menu);
        assert_eq!(menu.snapshot(), &catalog::default_snapshot());
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut menu = fresh();
        menu.add_category("Burgers").unwrap();
        menu.add_item(draft("Smash Burger", "250", "Burgers")).unwrap();
        menu.set_category_image("Burgers", PNG.to_string()).unwrap();
        let before = menu.snapshot().clone();

        let menu = reload(menu);
        assert_eq!(menu.snapshot(), &before);
    }

    #[test]
    fn test_corrupt_storage_is_repaired_on_load() {
        let keys = StorageKeys::default();
        let store = MemoryStore::with_entries([(keys.items.as_str(), "[{\"id\": 1}]")]);
        let menu = MenuState::load(SnapshotRepository::new(store));
        assert_eq!(menu.items(), catalog::default_items().as_slice());
    }

    #[test]
    fn test_largest_accepted_upload_fits_browser_quota() {
        let config = MenuConfig::default();
        let bytes = vec![0xFFu8; config.max_image_bytes];
        let uri = ingest_image("waffle.jpg", None, &bytes, config.max_image_bytes).unwrap();

        let mut menu = with_quota();
        menu.set_item_image("3", uri.clone()).unwrap();

        let menu = reload_quota(menu);
        assert_eq!(menu.item("3").unwrap().image, uri);
    }

    #[test]
    fn test_oversized_image_reports_storage_error() {
        let original = catalog::default_items()
            .into_iter()
            .find(|item| item.id == "3")
            .unwrap()
            .image;
        let huge = format!("data:image/jpeg;base64,{}", "A".repeat(BROWSER_QUOTA));

        let mut menu = with_quota();
        let err = menu.set_item_image("3", huge.clone()).unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        // the session keeps the new image even though it was not saved
        assert_eq!(menu.item("3").unwrap().image, huge);

        let menu = reload_quota(menu);
        assert_eq!(menu.item("3").unwrap().image, original);
    }

    #[test]
    fn test_add_category_reports_storage_error() {
        let mut menu = MenuState::load(SnapshotRepository::new(QuotaStore::new(0)));
        assert!(matches!(menu.add_category("Burgers"), Err(DomainError::Storage(_))));
        assert!(menu.categories().iter().any(|c| c == "Burgers"));
        assert!(matches!(
            menu.add_item(draft("Smash Burger", "250", "Shakes")),
            Err(DomainError::Storage(_))
        ));
        assert_eq!(menu.items().len(), catalog::default_items().len() + 1);
    }

    #[test]
    fn test_load_restores_orphan_categories() {
        let keys = StorageKeys::default();
        let store = MemoryStore::with_entries([(keys.categories.as_str(), r#"["Waffles"]"#)]);
        let menu = MenuState::load(SnapshotRepository::new(store));

        assert_eq!(menu.categories().first().map(String::as_str), Some(WAFFLES));
        assert!(menu.snapshot().orphan_categories().is_empty());
        assert_eq!(menu.categories().len(), DEFAULT_CATEGORIES.len());
    }
}
