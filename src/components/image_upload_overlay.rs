//! Image Upload Overlay Component
//!
//! Covers an image in edit mode; tapping it opens the file picker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::{DomainError, DomainResult};
use tracing::error;

use crate::browser;
use crate::context::use_menu;
use crate::upload::{read_image_file, selected_file};

/// Alert text for an image that was taken but could not be kept
fn save_failed_message(e: &DomainError) -> String {
    match e {
        DomainError::Storage(_) => "The image is shown for now but could not be saved on this \
             device, it will be gone after a reload. Try a smaller image."
            .to_string(),
        other => format!("Failed to save image. {}", other.user_message()),
    }
}

#[component]
pub fn ImageUploadOverlay(
    /// Receives the embedded `data:` URI and reports whether it was kept
    #[prop(into)] on_upload: Callback<String, DomainResult<()>>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let menu = use_menu();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (processing, set_processing) = signal(false);
    let label = label.unwrap_or_else(|| "Change Image".to_string());

    let on_change = move |ev: web_sys::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        let max_bytes = menu.config.with_value(|config| config.max_image_bytes);
        set_processing.set(true);
        spawn_local(async move {
            match read_image_file(file, max_bytes).await {
                Ok(data) => {
                    if let Err(e) = on_upload.run(data) {
                        browser::alert(&save_failed_message(&e));
                    }
                }
                Err(e) => {
                    error!(error = %e, "Image upload failed");
                    browser::alert(&format!("Failed to process image. {}", e.user_message()));
                }
            }
            set_processing.set(false);
        });
    };

    view! {
        <div
            class="upload-overlay"
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=input_ref
                on:change=on_change
            />
            <span class="upload-icon">{move || if processing.get() { "⏳" } else { "📷" }}</span>
            <span class="upload-label">
                {move || if processing.get() { "Processing...".to_string() } else { label.clone() }}
            </span>
        </div>
    }
}
