//! Cart Modal Component
//!
//! Order review: quantities, the chef's note, the customer's number and the
//! hand-off to WhatsApp.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::chef_note::{chef_note_or_fallback, GeminiChefNote};
use menu_core::checkout::{checkout_url, format_amount};
use menu_core::{Cart, CartLine};
use tracing::{debug, info};

use crate::browser;
use crate::context::use_menu;
use crate::store::{use_ui_store, UiStateStoreFields};

const PHONE_MAX_DIGITS: usize = 10;

/// Lines to write a chef's note for, `None` while closed or empty
///
/// Quantity changes leave the value alone, so they do not cause a new request.
fn note_trigger(open: Signal<bool>, cart: RwSignal<Cart>) -> Memo<Option<usize>> {
    Memo::new(move |_| {
        let lines = cart.with(|cart| cart.lines().len());
        (open.get() && lines > 0).then_some(lines)
    })
}

#[component]
pub fn CartModal() -> impl IntoView {
    let menu = use_menu();
    let ui = use_ui_store();

    let (phone, set_phone) = signal(String::new());
    let (phone_error, set_phone_error) = signal(None::<String>);
    let (chef_note, set_chef_note) = signal(String::new());
    let (note_loading, set_note_loading) = signal(false);
    // Bumped per request so a slow reply cannot overwrite a newer note
    let note_request = StoredValue::new(0u64);

    let line_count = move || menu.cart.with(|cart| cart.lines().len());
    let close = move || ui.cart_open().set(false);
    let trigger = note_trigger(Signal::derive(move || ui.cart_open().get()), menu.cart);

    // Ask for a new note when the modal opens or lines come and go
    Effect::new(move |_| {
        let Some(lines) = trigger.get() else {
            set_chef_note.set(String::new());
            set_note_loading.set(false);
            return;
        };

        note_request.update_value(|n| *n += 1);
        let request = note_request.get_value();
        let cart = menu.cart.get_untracked();
        let service = GeminiChefNote::new(menu.config.with_value(|c| c.chef_note.clone()));

        set_note_loading.set(true);
        spawn_local(async move {
            let note = chef_note_or_fallback(&service, &cart).await;
            if note_request.try_get_value() == Some(request) {
                set_chef_note.set(note);
                set_note_loading.set(false);
            } else {
                debug!(request, lines, "Dropping stale chef's note");
            }
        });
    });

    let on_phone_input = move |ev: web_sys::Event| {
        let digits: String = event_target_value(&ev)
            .chars()
            .filter(char::is_ascii_digit)
            .take(PHONE_MAX_DIGITS)
            .collect();
        set_phone.set(digits);
        set_phone_error.set(None);
    };

    let place_order = move |_| {
        let result = menu
            .config
            .with_value(|config| menu.cart.with(|cart| checkout_url(config, cart, &phone.get())));
        match result {
            Ok(url) => {
                info!(lines = line_count(), "Handing order to WhatsApp");
                browser::open_in_new_tab(&url);
            }
            Err(e) => set_phone_error.set(Some(e.user_message().to_string())),
        }
    };

    let total = move || format!("₹{}", menu.cart.with(|cart| format_amount(cart.total())));

    view! {
        <Show when=move || ui.cart_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal cart-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Your Order"</h2>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>

                    <Show
                        when=move || { line_count() > 0 }
                        fallback=|| view! {
                            <div class="cart-empty">
                                <p>"Your cart is empty."</p>
                                <p class="cart-empty-hint">"Add some yummy treats!"</p>
                            </div>
                        }
                    >
                        <div class="cart-lines">
                            <For
                                each=move || menu.cart.get().lines().to_vec()
                                key=|line| (line.item.id.clone(), line.quantity)
                                children=move |line| view! { <CartLineRow line=line /> }
                            />
                        </div>

                        <div class="chef-note">
                            <Show
                                when=move || !note_loading.get()
                                fallback=|| view! {
                                    <p class="chef-note-loading">"Chef is looking at your order..."</p>
                                }
                            >
                                <p class="chef-note-label">"Chef says"</p>
                                <p class="chef-note-text">{move || chef_note.get()}</p>
                            </Show>
                        </div>

                        <label class="phone-field">
                            <span>"Mobile Number"</span>
                            <input
                                type="tel"
                                inputmode="numeric"
                                placeholder="10-digit mobile number"
                                maxlength="10"
                                prop:value=move || phone.get()
                                on:input=on_phone_input
                            />
                        </label>
                        {move || phone_error.get().map(|message| view! {
                            <p class="form-error">{message}</p>
                        })}

                        <div class="cart-total">
                            <span>"Total"</span>
                            <span>{total}</span>
                        </div>

                        <button class="checkout-btn" on:click=place_order>
                            "Place Order on WhatsApp"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let menu = use_menu();
    let id = StoredValue::new(line.item.id.clone());
    let change = move |delta: i64| id.with_value(|id| menu.update_quantity(id, delta));

    view! {
        <div class="cart-line">
            <div class="cart-line-info">
                <span class="cart-line-name">{line.item.name.clone()}</span>
                <span class="cart-line-price">{format!("₹{}", format_amount(line.line_total()))}</span>
            </div>
            <div class="cart-line-qty">
                <button aria-label="Remove one" on:click=move |_| change(-1)>"−"</button>
                <span>{line.quantity}</span>
                <button aria-label="Add one" on:click=move |_| change(1)>"+"</button>
            </div>
        </div>
    }
}
