//! Configuration
//!
//! Fixed values the menu needs at runtime, overridable from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::repository::StorageKeys;

/// Chef's-note text generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct ChefNoteConfig {
    /// Credential for the text-generation API. `None` disables the call.
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of the generation API, model and method are appended
    pub endpoint: String,
}

impl Default for ChefNoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Order recipient, country code + number, digits only
    pub whatsapp_number: String,
    pub messaging_base_url: String,
    pub qr_service_url: String,
    /// Edge length of the QR image in pixels
    pub qr_size: u32,
    pub placeholder_base_url: String,
    /// Largest accepted uploaded image, in bytes. Base64 grows it by a
    /// third and `localStorage` holds about 5 MB per origin for everything.
    pub max_image_bytes: usize,
    pub storage_keys: StorageKeys,
    pub chef_note: ChefNoteConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "918600135430".to_string(),
            messaging_base_url: "https://wa.me".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 300,
            placeholder_base_url: "https://placehold.co/600x400/d6d3d1/57534e".to_string(),
            max_image_bytes: 1024 * 1024,
            storage_keys: StorageKeys::default(),
            chef_note: ChefNoteConfig::default(),
        }
    }
}

impl MenuConfig {
    /// Defaults overridden by any environment variables that are set
    ///
    /// In the browser there is no process environment, so the API key falls
    /// back to the value of `API_KEY` at build time.
    pub fn load() -> Self {
        let defaults = Self::default();

        let whatsapp_number = var("MENU_WHATSAPP_NUMBER")
            .filter(|n| is_recipient_number(n))
            .unwrap_or(defaults.whatsapp_number);
        let max_image_bytes = try_load("MENU_MAX_IMAGE_BYTES", defaults.max_image_bytes);
        let model = var("MENU_CHEF_NOTE_MODEL").unwrap_or(defaults.chef_note.model);
        let api_key = var("API_KEY")
            .or_else(|| option_env!("API_KEY").map(str::to_string))
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            info!("API_KEY not set, chef's notes will use the fallback text");
        }

        Self {
            whatsapp_number,
            max_image_bytes,
            chef_note: ChefNoteConfig {
                api_key,
                model,
                ..defaults.chef_note
            },
            ..defaults
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
        None => default,
    }
}

fn is_recipient_number(number: &str) -> bool {
    let valid = !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        warn!("MENU_WHATSAPP_NUMBER must be digits only, using default");
    }
    valid
}
