//! UI Components
//!
//! Reusable Leptos components.

mod add_category_modal;
mod add_product_modal;
mod cart_modal;
mod category_tile;
mod image_upload_overlay;
mod image_with_fallback;
mod menu_card;
mod qr_code_modal;

pub use add_category_modal::AddCategoryModal;
pub use add_product_modal::AddProductModal;
pub use cart_modal::CartModal;
pub use category_tile::CategoryTile;
pub use image_upload_overlay::ImageUploadOverlay;
pub use image_with_fallback::ImageWithFallback;
pub use menu_card::MenuCard;
pub use qr_code_modal::QrCodeModal;
