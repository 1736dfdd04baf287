//! Menu Item Entity
//!
//! A purchasable product listed under one category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// Prefix that marks an image as embedded data rather than a path
pub const EMBEDDED_IMAGE_PREFIX: &str = "data:";

/// A product on the menu
///
/// Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier within the item list
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in rupees, never negative
    pub price: f64,
    /// Name of the owning category
    pub category: String,
    /// Relative path or `data:` URI, empty when no photo was given
    pub image: String,
}

impl MenuItem {
    /// Whether the image was uploaded on this device (as opposed to a bundled path)
    pub fn has_embedded_image(&self) -> bool {
        self.image.starts_with(EMBEDDED_IMAGE_PREFIX)
    }
}

impl Entity for MenuItem {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields entered by the owner when adding a product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    /// Raw price text as typed
    pub price: String,
    pub category: String,
    pub image: String,
}

impl NewMenuItem {
    /// Validate the draft and assign a fresh identifier
    pub fn into_item(self) -> DomainResult<MenuItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Product name is required".to_string()));
        }

        let price_text = self.price.trim();
        if price_text.is_empty() {
            return Err(DomainError::InvalidInput("Price is required".to_string()));
        }
        let price: f64 = price_text
            .parse()
            .map_err(|_| DomainError::InvalidInput(format!("'{}' is not a valid price", price_text)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidInput("Price must be zero or more".to_string()));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(DomainError::InvalidInput("Category is required".to_string()));
        }

        Ok(MenuItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category: category.to_string(),
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: "  Freshly made  ".to_string(),
            price: price.to_string(),
            category: "Waffles".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_draft_into_item() {
        let item = draft(" Lotus Biscoff ", "199.5").into_item().unwrap();
        assert_eq!(item.name, "Lotus Biscoff");
        assert_eq!(item.description, "Freshly made");
        assert_eq!(item.price, 199.5);
        assert_eq!(item.category, "Waffles");
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_draft_ids_are_unique() {
        let a = draft("A", "10").into_item().unwrap();
        let b = draft("A", "10").into_item().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_draft_requires_name_and_price() {
        assert!(matches!(draft("   ", "10").into_item(), Err(DomainError::InvalidInput(_))));
        assert!(matches!(draft("Tea", "").into_item(), Err(DomainError::InvalidInput(_))));
        assert!(matches!(draft("Tea", "abc").into_item(), Err(DomainError::InvalidInput(_))));
        assert!(matches!(draft("Tea", "-5").into_item(), Err(DomainError::InvalidInput(_))));
        assert!(matches!(draft("Tea", "inf").into_item(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_embedded_image_detection() {
        let mut item = draft("Tea", "10").into_item().unwrap();
        assert!(!item.has_embedded_image());
        item.image = "data:image/png;base64,AAAA".to_string();
        assert!(item.has_embedded_image());
    }

    #[test]
    fn test_persisted_field_names() {
        let item = MenuItem {
            id: "1".to_string(),
            name: "Cappuccino".to_string(),
            description: "Espresso".to_string(),
            price: 140.0,
            category: "Hot Brew".to_string(),
            image: "images/hot-brew.jpg".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["price"], 140.0);
        assert_eq!(json["category"], "Hot Brew");
    }
}
