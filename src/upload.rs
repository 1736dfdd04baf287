//! Image Upload
//!
//! Reads a file picked in an `<input type="file">` and embeds it.

use menu_core::images::ingest_image;
use menu_core::{DomainError, DomainResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// First file chosen in the input that fired `ev`
///
/// Clears the input so picking the same file again fires another change.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Read `file` and turn it into a `data:` URI
pub async fn read_image_file(file: web_sys::File, max_bytes: usize) -> DomainResult<String> {
    let name = file.name();
    if file.size() > max_bytes as f64 {
        return Err(DomainError::Ingestion(format!(
            "{} is too large. Please try a smaller file.",
            name
        )));
    }

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| DomainError::Ingestion(format!("Could not read {}: {:?}", name, e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let declared = file.type_();

    ingest_image(&name, Some(declared.as_str()), &bytes, max_bytes)
}
