//! Dezzerto Menu App
//!
//! Category grid and product list with a floating cart. Owner tools stay
//! hidden behind the footer link.

use leptos::prelude::*;
use menu_core::checkout::format_amount;
use menu_core::{MenuConfig, MenuItem, MenuState, SnapshotRepository};
use reactive_stores::Store;

use crate::browser;
use crate::components::{
    AddCategoryModal, AddProductModal, CartModal, CategoryTile, MenuCard, QrCodeModal,
};
use crate::context::{use_menu, MenuContext};
use crate::storage::BrowserStorage;
use crate::store::{is_editing, open_category, use_ui_store, Screen, UiState, UiStateStoreFields};

const RESET_PROMPT: &str = "Are you sure you want to reset all images, products and categories \
                            to default? This cannot be undone.";

#[component]
pub fn App() -> impl IntoView {
    let config = MenuConfig::load();
    let repo = SnapshotRepository::with_keys(BrowserStorage, config.storage_keys.clone());
    let ctx = MenuContext::new(MenuState::load(repo), config);
    provide_context(ctx);
    let ui = Store::new(UiState::default());
    provide_context(ui);

    // Keep a category selected once any exist
    Effect::new(move |_| {
        let first = ctx.menu.with(|m| m.categories().first().cloned());
        if let Some(first) = first {
            if ui.selected_category().with_untracked(String::is_empty) {
                ui.selected_category().set(first);
            }
        }
    });

    view! {
        <div class="app-layout">
            <Header />
            <EditBar />
            <main class="main-content">
                <Show when=move || ui.screen().get() == Screen::Categories fallback=|| view! { <ProductList /> }>
                    <CategoryGrid />
                </Show>
            </main>
            <Footer />
            <FloatingCart />

            <CartModal />
            <QrCodeModal />
            <AddCategoryModal />
            <AddProductModal />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ui = use_ui_store();
    let on_products = move || ui.screen().get() == Screen::Products;

    view! {
        <header class="app-header">
            <Show
                when=on_products
                fallback=|| view! {
                    <div class="brand">
                        <span class="brand-name">"dezzerto"</span>
                        <span class="brand-tagline">"the sweet side of life"</span>
                    </div>
                }
            >
                <button
                    class="back-btn"
                    aria-label="Back to categories"
                    on:click=move |_| ui.screen().set(Screen::Categories)
                >
                    "←"
                </button>
                <h1 class="header-title">{move || ui.selected_category().get()}</h1>
            </Show>

            <Show when=move || ui.show_owner_tools().get()>
                <div class="owner-tools">
                    <button
                        class="icon-btn"
                        title="Menu QR code"
                        on:click=move |_| ui.qr_open().set(true)
                    >
                        "▦"
                    </button>
                    <button
                        class=move || if ui.editing().get() { "icon-btn active" } else { "icon-btn" }
                        title=move || if ui.editing().get() { "Lock editing" } else { "Unlock editing" }
                        on:click=move |_| ui.editing().update(|editing| *editing = !*editing)
                    >
                        {move || if ui.editing().get() { "🔓" } else { "🔒" }}
                    </button>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn EditBar() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();

    let on_reset = move |_| {
        if !browser::confirm(RESET_PROMPT) {
            return;
        }
        if menu.reset_to_defaults().is_err() {
            browser::alert_unsaved("The reset");
        }
        ui.editing().set(false);
        ui.show_owner_tools().set(false);
        ui.screen().set(Screen::Categories);
        let first = menu.menu.with_untracked(|m| m.categories().first().cloned());
        ui.selected_category().set(first.unwrap_or_default());
        browser::scroll_to_top();
    };

    view! {
        <Show when=move || is_editing(&ui)>
            <div class="edit-bar">
                <span class="edit-bar-title">"Edit Mode"</span>
                <span class="edit-bar-info">"Changes are saved to this device only"</span>
                <button class="reset-btn" on:click=on_reset>"Reset to Default"</button>
            </div>
        </Show>
    }
}

#[component]
fn CategoryGrid() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();
    let editing = move || is_editing(&ui);

    let on_select = Callback::new(move |category: String| {
        open_category(&ui, category);
        browser::scroll_to_top();
    });

    view! {
        <section class="category-grid">
            <For
                each=move || menu.menu.with(|m| m.categories().to_vec())
                key=|category| category.clone()
                children=move |category| view! { <CategoryTile category=category on_select=on_select /> }
            />
            <Show when=editing>
                <button class="category-tile add-tile" on:click=move |_| ui.add_category_open().set(true)>
                    <span class="add-tile-icon">"+"</span>
                    <span>"Add Category"</span>
                </button>
            </Show>
        </section>
    }
}

#[component]
fn ProductList() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();
    let editing = move || is_editing(&ui);

    let items = move || {
        let category = ui.selected_category().get();
        menu.menu.with(|m| m.items_in(&category).cloned().collect::<Vec<_>>())
    };
    let on_add = Callback::new(move |item: MenuItem| menu.add_to_cart(&item));

    view! {
        <section class="product-list">
            <Show when=editing>
                <button class="add-product-btn" on:click=move |_| ui.add_product_open().set(true)>
                    {move || format!("+ Add New Product to {}", ui.selected_category().get())}
                </button>
            </Show>

            <Show
                when=move || !items().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"No items yet."</p>
                        <button class="link-btn" on:click=move |_| ui.screen().set(Screen::Categories)>
                            "Browse other categories"
                        </button>
                    </div>
                }
            >
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| view! { <MenuCard item=item on_add=on_add /> }
                />
            </Show>
        </section>
    }
}

#[component]
fn FloatingCart() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();

    let count = move || menu.cart.with(|cart| cart.count());
    let visible = move || count() > 0 && !is_editing(&ui);

    view! {
        <Show when=visible>
            <button class="floating-cart" on:click=move |_| ui.cart_open().set(true)>
                <span class="floating-cart-count">{count}</span>
                <span class="floating-cart-total">
                    {move || format!("₹{}", menu.cart.with(|cart| format_amount(cart.total())))}
                </span>
                <span class="floating-cart-cta">"View Order"</span>
            </button>
        </Show>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let ui = use_ui_store();

    let toggle_owner_tools = move |_| {
        let show = !ui.show_owner_tools().get_untracked();
        ui.show_owner_tools().set(show);
        if !show {
            ui.editing().set(false);
        }
    };

    view! {
        <footer class="app-footer">
            <p>"© 2025 dezzerto"</p>
            <button class="owner-link" on:click=toggle_owner_tools>
                {move || if ui.show_owner_tools().get() { "Hide Owner Tools" } else { "Owner Access" }}
            </button>
        </footer>
    }
}
