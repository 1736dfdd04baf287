//! Chef's Note
//!
//! A short, decorative comment about the customer's order produced by an
//! external text-generation API. Purely cosmetic: every failure collapses to
//! a fixed fallback line.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::cart::Cart;
use crate::config::ChefNoteConfig;
use crate::domain::{DomainError, DomainResult};

/// Shown whenever the note cannot be generated
pub const FALLBACK_NOTE: &str = "Great choice! Enjoy your meal.";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Something that can write a note for a list of ordered item names
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChefNoteService {
    async fn compose(&self, item_names: &[&str]) -> DomainResult<String>;
}

/// Prompt sent for a given order
pub fn build_prompt(item_names: &[&str]) -> String {
    format!(
        "The customer has ordered: {}. \
         Act as a quirky, friendly cafe barista. Write a very short (max 15 words) fun comment \
         complimenting their taste or suggesting a vibe. \
         Do not list ingredients. Just a fun one-liner.",
        item_names.join(", ")
    )
}

/// Note for the cart: empty for an empty cart, the fallback on any failure
pub async fn chef_note_or_fallback<C>(service: &C, cart: &Cart) -> String
where
    C: ChefNoteService + ?Sized,
{
    if cart.is_empty() {
        return String::new();
    }

    match service.compose(&cart.item_names()).await {
        Ok(note) if !note.trim().is_empty() => note.trim().to_string(),
        Ok(_) => {
            debug!("Chef's note came back blank, using fallback");
            FALLBACK_NOTE.to_string()
        }
        Err(e) => {
            error!(error = %e, "Chef's note request failed");
            FALLBACK_NOTE.to_string()
        }
    }
}

// ========================
// Gemini generateContent
// ========================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        Some(text.trim().to_string())
    }
}

/// Notes generated by the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiChefNote {
    client: reqwest::Client,
    config: ChefNoteConfig,
}

impl GeminiChefNote {
    pub fn new(config: ChefNoteConfig) -> Self {
        Self {
            client: build_client(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChefNoteService for GeminiChefNote {
    async fn compose(&self, item_names: &[&str]) -> DomainResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::External("No API key configured".to_string()))?;

        let prompt = build_prompt(item_names);
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };

        debug!(model = %self.config.model, items = item_names.len(), "Requesting chef's note");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::External(format!("Request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| DomainError::External(format!("Bad response: {}", e)))?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DomainError::External(format!("Unreadable response: {}", e)))?;

        parsed
            .text()
            .ok_or_else(|| DomainError::External("Response had no candidates".to_string()))
    }
}
