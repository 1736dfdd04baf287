//! Thin wrappers over `window` calls used by the components.

use tracing::warn;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Tell the owner a change only lives in memory until the page reloads
pub fn alert_unsaved(change: &str) {
    alert(&format!(
        "{} could not be saved on this device and will be gone after a reload.",
        change
    ));
}

/// Blocking yes/no question, `false` if it cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|window| window.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(Some(_)))) {
        warn!("Could not open {}", url);
    }
}

/// Full URL of the current page
pub fn current_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

pub fn current_host() -> String {
    web_sys::window()
        .and_then(|window| window.location().host().ok())
        .unwrap_or_default()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
