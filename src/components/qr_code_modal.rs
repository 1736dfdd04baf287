//! QR Code Modal Component

use leptos::prelude::*;
use menu_core::qr::qr_code_url;

use crate::browser;
use crate::context::use_menu;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Shows a QR code that opens this page, for printing on tables
#[component]
pub fn QrCodeModal() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();
    let close = move || ui.qr_open().set(false);

    view! {
        <Show when=move || ui.qr_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal qr-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                        "×"
                    </button>
                    <h2>"Scan for Menu"</h2>
                    <p class="qr-hint">"Customers can scan this code to view the menu on their phones."</p>
                    <img
                        class="qr-image"
                        alt="Menu QR Code"
                        src=move || menu.config.with_value(|config| qr_code_url(config, &browser::current_url()))
                    />
                    <p class="qr-host">{browser::current_host()}</p>
                </div>
            </div>
        </Show>
    }
}
