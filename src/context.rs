//! Application Context
//!
//! Menu, cart and configuration handles provided via Leptos Context API.
//! Components never reach state any other way.

use leptos::prelude::*;
use menu_core::{Cart, DomainError, DomainResult, MenuConfig, MenuItem, MenuState, NewMenuItem};
use tracing::error;

use crate::storage::BrowserStorage;

/// App-wide state handles provided via context
#[derive(Clone, Copy)]
pub struct MenuContext {
    /// Menu for this device, persisted to localStorage
    pub menu: RwSignal<MenuState<BrowserStorage>>,
    /// Current order, in memory only
    pub cart: RwSignal<Cart>,
    pub config: StoredValue<MenuConfig>,
}

impl MenuContext {
    pub fn new(menu: MenuState<BrowserStorage>, config: MenuConfig) -> Self {
        Self {
            menu: RwSignal::new(menu),
            cart: RwSignal::new(Cart::new()),
            config: StoredValue::new(config),
        }
    }

    /// Add one of `item` to the cart
    pub fn add_to_cart(&self, item: &MenuItem) {
        self.cart.update(|cart| cart.add_item(item));
    }

    pub fn update_quantity(&self, id: &str, delta: i64) {
        self.cart.update(|cart| cart.update_quantity(id, delta));
    }

    pub fn add_category(&self, name: &str) -> DomainResult<bool> {
        self.menu
            .try_update(|menu| menu.add_category(name))
            .unwrap_or_else(|| Err(disposed()))
    }

    pub fn add_item(&self, draft: NewMenuItem) -> DomainResult<MenuItem> {
        self.menu
            .try_update(|menu| menu.add_item(draft))
            .unwrap_or_else(|| Err(disposed()))
    }

    /// `Err(Storage)` still leaves the new image on screen for this session
    pub fn set_item_image(&self, id: &str, image: String) -> DomainResult<()> {
        self.menu
            .try_update(|menu| menu.set_item_image(id, image))
            .unwrap_or_else(|| Err(disposed()))
            .inspect_err(|e| error!(error = %e, "Failed to replace item image"))
    }

    pub fn set_category_image(&self, category: &str, image: String) -> DomainResult<()> {
        self.menu
            .try_update(|menu| menu.set_category_image(category, image))
            .unwrap_or_else(|| Err(disposed()))
            .inspect_err(|e| error!(error = %e, "Failed to replace category image"))
    }

    /// Restore the default menu and start a fresh order
    pub fn reset_to_defaults(&self) -> DomainResult<()> {
        self.cart.update(Cart::clear);
        self.menu
            .try_update(|menu| menu.reset_to_defaults())
            .unwrap_or_else(|| Err(disposed()))
    }
}

fn disposed() -> DomainError {
    DomainError::Storage("Menu state is no longer available".to_string())
}

/// Get the menu context
pub fn use_menu() -> MenuContext {
    expect_context::<MenuContext>()
}
