//! Add Category Modal Component

use leptos::prelude::*;
use menu_core::DomainError;
use tracing::info;

use crate::browser;
use crate::context::use_menu;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn AddCategoryModal() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();

    let (name, set_name) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let close = move || {
        set_name.set(String::new());
        set_form_error.set(None);
        ui.add_category_open().set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            set_form_error.set(Some("Category name is required".to_string()));
            return;
        }
        match menu.add_category(&trimmed) {
            Ok(added) => {
                info!(category = %trimmed, added, "Category submitted");
                close();
            }
            Err(DomainError::Storage(_)) => {
                browser::alert_unsaved("The new category");
                close();
            }
            Err(e) => set_form_error.set(Some(e.user_message().to_string())),
        }
    };

    view! {
        <Show when=move || ui.add_category_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Add New Category"</h2>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <form class="modal-form" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="e.g. Smoothies"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                set_name.set(event_target_value(&ev));
                                set_form_error.set(None);
                            }
                        />
                        {move || form_error.get().map(|message| view! {
                            <p class="form-error">{message}</p>
                        })}
                        <button type="submit" class="primary-btn">"Add Category"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
