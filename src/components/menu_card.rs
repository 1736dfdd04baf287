//! Menu Card Component
//!
//! A product in the listing with its photo, price and add-to-cart button.

use leptos::prelude::*;
use menu_core::checkout::format_amount;
use menu_core::MenuItem;

use crate::components::{ImageUploadOverlay, ImageWithFallback};
use crate::context::use_menu;
use crate::store::{is_editing, use_ui_store};

#[component]
pub fn MenuCard(item: MenuItem, #[prop(into)] on_add: Callback<MenuItem>) -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();
    let editing = move || is_editing(&ui);

    let id = StoredValue::new(item.id.clone());
    // Read the image live so an upload shows without re-keying the list
    let image = Signal::derive(move || {
        id.with_value(|id| {
            menu.menu
                .with(|m| m.item(id).map(|item| item.image.clone()))
                .unwrap_or_default()
        })
    });
    let on_image_upload = Callback::new(move |data: String| {
        id.with_value(|id| menu.set_item_image(id, data))
    });

    let price = format!("₹{}", format_amount(item.price));
    let item = StoredValue::new(item);

    view! {
        <div class="menu-card">
            <div class="menu-card-image">
                <ImageWithFallback
                    src=image
                    alt=item.with_value(|item| item.name.clone())
                    fallback_text="No Image"
                />
                <Show when=editing>
                    <ImageUploadOverlay label="Edit" on_upload=on_image_upload />
                </Show>
            </div>

            <div class="menu-card-body">
                <div>
                    <h3 class="menu-card-name">{item.with_value(|item| item.name.clone())}</h3>
                    <p class="menu-card-description">{item.with_value(|item| item.description.clone())}</p>
                </div>
                <div class="menu-card-footer">
                    <span class="menu-card-price">{price}</span>
                    <Show when=move || !editing()>
                        <button
                            class="menu-card-add"
                            aria-label="Add to cart"
                            on:click=move |_| on_add.run(item.get_value())
                        >
                            "+"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
