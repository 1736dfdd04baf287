//! Image With Fallback Component
//!
//! Retries a bundled image under alternative roots before falling back to a
//! labelled placeholder.

use leptos::prelude::*;
use menu_core::images::{placeholder_url, FallbackImage};

use crate::context::use_menu;

#[component]
pub fn ImageWithFallback(
    /// Nominal source, path or `data:` URI
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    /// Label for the placeholder shown once every source failed
    #[prop(optional, into)] fallback_text: Option<String>,
) -> impl IntoView {
    let menu = use_menu();
    let placeholder_base = menu.config.with_value(|config| config.placeholder_base_url.clone());

    let image = RwSignal::new(FallbackImage::new(&src.get_untracked()));

    // Start over whenever the source changes, e.g. after an upload
    Effect::new(move |_| {
        let next = src.get();
        image.set(FallbackImage::new(&next));
    });

    let alt = StoredValue::new(alt);
    let class = StoredValue::new(class);
    let placeholder = fallback_text.map(|text| placeholder_url(&placeholder_base, &text));

    move || match image.with(|img| img.current().map(str::to_string)) {
        Some(current) => view! {
            <img
                src=current
                alt=alt.get_value()
                class=class.get_value()
                on:error=move |_| image.update(|img| {
                    img.advance();
                })
            />
        }
        .into_any(),
        None => {
            let fill = placeholder.clone().map(|url| view! {
                <img src=url alt=alt.get_value() class="image-fallback-fill" />
            });
            view! {
                <div class=format!("image-fallback {}", class.get_value())>
                    {fill}
                    <span class="image-fallback-icon">"🖼"</span>
                </div>
            }
            .into_any()
        }
    }
}
