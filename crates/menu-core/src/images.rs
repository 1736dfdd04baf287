//! Image Handling
//!
//! Converts uploaded files into `data:` URIs for storage, and computes the
//! retry paths tried when a bundled image fails to load.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::checkout::encode_uri_component;
use crate::domain::{DomainError, DomainResult, EMBEDDED_IMAGE_PREFIX};

/// Encode an uploaded image as a `data:` URI
///
/// `declared_type` is the MIME type reported by the browser, if any; when it
/// is missing the type is guessed from the file name.
pub fn ingest_image(
    file_name: &str,
    declared_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> DomainResult<String> {
    if bytes.is_empty() {
        return Err(DomainError::Ingestion(format!("{} is empty", file_name)));
    }
    if bytes.len() > max_bytes {
        return Err(DomainError::Ingestion(format!(
            "{} is too large ({} KB, limit {} KB). Please try a smaller file.",
            file_name,
            bytes.len() / 1024,
            max_bytes / 1024
        )));
    }

    let mime = match declared_type.map(str::trim).filter(|t| !t.is_empty()) {
        Some(declared) => declared.to_ascii_lowercase(),
        None => mime_guess::from_path(file_name)
            .first()
            .map(|m| m.essence_str().to_string())
            .ok_or_else(|| {
                DomainError::Ingestion(format!("Cannot tell what kind of file {} is", file_name))
            })?,
    };
    if !mime.starts_with("image/") {
        return Err(DomainError::Ingestion(format!("{} is not an image ({})", file_name, mime)));
    }

    debug!(file_name, mime = %mime, bytes = bytes.len(), "Encoding uploaded image");
    Ok(format!("{}{};base64,{}", EMBEDDED_IMAGE_PREFIX, mime, STANDARD.encode(bytes)))
}

/// Whether `src` is already embedded data
pub fn is_embedded(src: &str) -> bool {
    src.starts_with(EMBEDDED_IMAGE_PREFIX)
}

/// Sources to try for `src`, in order
///
/// Bundled paths get absolute, `/src/` and `/public/` variants because the
/// asset root differs between dev servers and static hosting.
pub fn fallback_candidates(src: &str) -> Vec<String> {
    if src.is_empty() {
        return Vec::new();
    }
    if is_embedded(src) {
        return vec![src.to_string()];
    }

    let clean = src.trim_start_matches('/');
    let clean = clean.strip_prefix("./").unwrap_or(clean);
    vec![
        src.to_string(),
        format!("/{}", clean),
        format!("/src/{}", clean),
        format!("/public/{}", clean),
    ]
}

/// Generated placeholder picture labelled with `label`
pub fn placeholder_url(base_url: &str, label: &str) -> String {
    format!("{}?text={}", base_url.trim_end_matches('/'), encode_uri_component(label))
}

/// Progress through [`fallback_candidates`] as load errors come in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    candidates: Vec<String>,
    attempt: usize,
}

impl FallbackImage {
    pub fn new(src: &str) -> Self {
        Self {
            candidates: fallback_candidates(src),
            attempt: 0,
        }
    }

    /// Source to load now, `None` once every candidate has failed
    pub fn current(&self) -> Option<&str> {
        self.candidates.get(self.attempt).map(String::as_str)
    }

    /// Record a load failure and move on to the next candidate
    pub fn advance(&mut self) -> Option<&str> {
        if self.attempt < self.candidates.len() {
            self.attempt += 1;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 1024;

    #[test]
    fn test_ingest_declared_type() {
        let uri = ingest_image("photo.bin", Some("image/PNG"), b"abc", LIMIT).unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_ingest_guesses_type_from_name() {
        let uri = ingest_image("waffle.jpg", None, b"abc", LIMIT).unwrap();
        assert_eq!(uri, "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn test_ingest_rejects_bad_files() {
        assert!(matches!(ingest_image("a.png", None, b"", LIMIT), Err(DomainError::Ingestion(_))));
        assert!(matches!(
            ingest_image("a.png", None, &vec![0u8; LIMIT + 1], LIMIT),
            Err(DomainError::Ingestion(_))
        ));
        assert!(matches!(
            ingest_image("notes.txt", None, b"abc", LIMIT),
            Err(DomainError::Ingestion(_))
        ));
        assert!(matches!(
            ingest_image("a.png", Some("application/pdf"), b"abc", LIMIT),
            Err(DomainError::Ingestion(_))
        ));
        assert!(matches!(
            ingest_image("no-extension", None, b"abc", LIMIT),
            Err(DomainError::Ingestion(_))
        ));
    }

    #[test]
    fn test_fallback_candidates() {
        assert_eq!(
            fallback_candidates("images/brownie.jpg"),
            vec![
                "images/brownie.jpg",
                "/images/brownie.jpg",
                "/src/images/brownie.jpg",
                "/public/images/brownie.jpg",
            ]
        );
        assert_eq!(fallback_candidates("//images/a.jpg")[2], "/src/images/a.jpg");
        assert_eq!(fallback_candidates("./images/a.jpg")[1], "/images/a.jpg");
        assert_eq!(fallback_candidates("data:image/png;base64,AA").len(), 1);
        assert!(fallback_candidates("").is_empty());
    }

    #[test]
    fn test_fallback_image_walks_candidates() {
        let mut image = FallbackImage::new("images/ice-cream.jpg");
        assert_eq!(image.current(), Some("images/ice-cream.jpg"));
        assert_eq!(image.advance(), Some("/images/ice-cream.jpg"));
        assert_eq!(image.advance(), Some("/src/images/ice-cream.jpg"));
        assert_eq!(image.advance(), Some("/public/images/ice-cream.jpg"));
        assert_eq!(image.advance(), None);
        assert_eq!(image.advance(), None);
    }

    #[test]
    fn test_empty_source_is_immediately_exhausted() {
        assert_eq!(FallbackImage::new("").current(), None);
    }

    #[test]
    fn test_placeholder_url() {
        assert_eq!(
            placeholder_url("https://placehold.co/600x400/d6d3d1/57534e", "Hot Brew"),
            "https://placehold.co/600x400/d6d3d1/57534e?text=Hot%20Brew"
        );
    }
}
