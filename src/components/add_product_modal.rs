//! Add Product Modal Component
//!
//! Creates a menu item in the category currently being browsed.

use leptos::prelude::*;
use menu_core::{DomainError, NewMenuItem};
use tracing::info;

use crate::browser;
use crate::components::{ImageUploadOverlay, ImageWithFallback};
use crate::context::use_menu;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn AddProductModal() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let category = move || ui.selected_category().get();

    let close = move || {
        for field in [name, description, price, image] {
            field.set(String::new());
        }
        form_error.set(None);
        ui.add_product_open().set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewMenuItem {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            category: category(),
            image: image.get(),
        };
        match menu.add_item(draft) {
            Ok(item) => {
                info!(id = %item.id, category = %item.category, "Product added");
                close();
            }
            Err(DomainError::Storage(_)) => {
                browser::alert_unsaved("The new product");
                close();
            }
            Err(e) => form_error.set(Some(e.user_message().to_string())),
        }
    };

    view! {
        <Show when=move || ui.add_product_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || format!("Add Item to {}", category())}</h2>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <form class="modal-form" on:submit=on_submit>
                        <div class="product-photo">
                            <Show
                                when=move || !image.with(String::is_empty)
                                fallback=|| view! { <span class="product-photo-empty">"No photo yet"</span> }
                            >
                                <ImageWithFallback src=image alt="New product photo" />
                            </Show>
                            <ImageUploadOverlay
                                label="Upload Photo"
                                on_upload=Callback::new(move |data: String| {
                                    image.set(data);
                                    Ok(())
                                })
                            />
                        </div>
                        <input
                            type="text"
                            placeholder="Item name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            placeholder="Price (₹)"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                        {move || form_error.get().map(|message| view! {
                            <p class="form-error">{message}</p>
                        })}
                        <button type="submit" class="primary-btn">"Add Product"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
