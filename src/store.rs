//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over which screen
//! and which dialogs are showing.

use leptos::prelude::*;
use reactive_stores::Store;

/// Top-level screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Categories,
    Products,
}

/// Navigation and dialog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub screen: Screen,
    /// Category whose products are listed
    pub selected_category: String,
    /// Owner tools revealed from the footer
    pub show_owner_tools: bool,
    /// Edit mode, only reachable with owner tools shown
    pub editing: bool,
    pub cart_open: bool,
    pub qr_open: bool,
    pub add_category_open: bool,
    pub add_product_open: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Show the products of `category`
pub fn open_category(store: &UiStore, category: String) {
    store.selected_category().set(category);
    store.screen().set(Screen::Products);
}

/// Whether edit affordances should be visible
pub fn is_editing(store: &UiStore) -> bool {
    store.show_owner_tools().get() && store.editing().get()
}
