//! QR code link for sharing the menu page.

use crate::checkout::encode_uri_component;
use crate::config::MenuConfig;

/// Image URL of a QR code that points at `page_url`
pub fn qr_code_url(config: &MenuConfig, page_url: &str) -> String {
    format!(
        "{}?size={size}x{size}&data={}",
        config.qr_service_url,
        encode_uri_component(page_url),
        size = config.qr_size
    )
}
