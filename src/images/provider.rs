use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use super::emoji::emoji_for;
use super::types::ImageResult;

/// How long a lookup may take before falling back to emoji.
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur while looking up an image.
#[derive(Debug)]
pub enum ImageError {
    /// Provider misconfigured (bad base URL).
    Config(String),
    /// Network-level failure (DNS, connection refused).
    Network(String),
    /// Image service returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the service's response.
    Parse(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Config(msg) => write!(f, "config error: {msg}"),
            ImageError::Network(msg) => write!(f, "network error: {msg}"),
            ImageError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ImageError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Looks up an image reference for a single-word key. `Ok(None)` means
    /// the service has nothing for this key.
    async fn fetch(&self, key: &str) -> Result<Option<String>, ImageError>;
}

/// Race the provider against `timeout`, falling back to the emoji table and
/// finally to `ImageResult::None`. Never fails.
pub async fn resolve_image(
    provider: Option<&dyn ImageProvider>,
    key: &str,
    timeout: Duration,
) -> ImageResult {
    if let Some(provider) = provider {
        match tokio::time::timeout(timeout, provider.fetch(key)).await {
            Ok(Ok(Some(reference))) => {
                debug!("Image for '{}' from {}: {}", key, provider.name(), reference);
                return ImageResult::Image(reference);
            }
            Ok(Ok(None)) => debug!("No image for '{}' from {}", key, provider.name()),
            Ok(Err(e)) => warn!("Image lookup for '{}' failed: {}", key, e),
            Err(_) => warn!(
                "Image lookup for '{}' timed out after {}ms",
                key,
                timeout.as_millis()
            ),
        }
    }

    match emoji_for(key) {
        Some(glyph) => ImageResult::Emoji(glyph.to_string()),
        None => ImageResult::None,
    }
}
