//! Menu Snapshot
//!
//! The unit that is persisted: items, categories and category image overrides.

use std::collections::BTreeMap;

use super::menu_item::MenuItem;

/// Category name -> image string
pub type CategoryImages = BTreeMap<String, String>;

/// Everything the owner can change about the menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    pub items: Vec<MenuItem>,
    /// Display order of categories, no duplicates
    pub categories: Vec<String>,
    pub category_images: CategoryImages,
}

impl MenuSnapshot {
    /// Whether `name` is a known category (exact match)
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Categories referenced by items but missing from the category list
    pub fn orphan_categories(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = Vec::new();
        for item in &self.items {
            let category = item.category.as_str();
            if !self.has_category(category) && !orphans.contains(&category) {
                orphans.push(category);
            }
        }
        orphans
    }
}
