//! Category Tile Component
//!
//! One cell of the category grid. In edit mode the tile stops navigating and
//! offers an image upload instead.

use leptos::prelude::*;

use crate::components::{ImageUploadOverlay, ImageWithFallback};
use crate::context::use_menu;
use crate::store::{is_editing, use_ui_store};

#[component]
pub fn CategoryTile(
    #[prop(into)] category: String,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();
    let editing = move || is_editing(&ui);

    let name = StoredValue::new(category.clone());
    let image = Signal::derive(move || {
        name.with_value(|name| menu.menu.with(|m| m.resolve_image(name).to_string()))
    });
    let on_category_upload = Callback::new(move |data: String| {
        name.with_value(|name| menu.set_category_image(name, data))
    });

    view! {
        <div class="category-tile">
            <button
                class="category-tile-button"
                disabled=editing
                on:click=move |_| on_select.run(name.get_value())
            >
                <ImageWithFallback
                    src=image
                    alt=category.clone()
                    fallback_text=category.clone()
                    class="category-tile-image"
                />
                <div class="category-tile-shade"></div>
                <div class="category-tile-caption">
                    <span class="category-tile-name">{category}</span>
                    <Show when=move || !editing()>
                        <span class="category-tile-hint">"View Items"</span>
                    </Show>
                </div>
            </button>

            <Show when=editing>
                <div class="category-tile-edit">
                    <ImageUploadOverlay label="Edit Category Image" on_upload=on_category_upload />
                    <span class="category-tile-edit-hint">"Tap to Change"</span>
                </div>
            </Show>
        </div>
    }
}
