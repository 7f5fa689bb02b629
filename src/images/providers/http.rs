//! HTTP image lookup service.
//!
//! Protocol: `GET {base_url}/{key}` answers `200 {"url": "..."}` when an
//! image exists and `404` when it does not. `"url": null` is treated the
//! same as a 404.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::images::{ImageError, ImageProvider};

#[derive(Deserialize, Debug)]
struct LookupResponse {
    url: Option<String>,
}

pub struct HttpImageProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpImageProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ImageError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ImageError::Config(format!(
                "image base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>, ImageError> {
        let url = format!("{}/{}", self.base_url, key);
        debug!("Image lookup: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Image service error: {} - {}", status.as_u16(), message);
            return Err(ImageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Parse(e.to_string()))?;
        Ok(body.url.filter(|u| !u.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let provider = HttpImageProvider::new("http://localhost:8080/images/").unwrap();
        assert_eq!(provider.base_url(), "http://localhost:8080/images");
    }

    #[test]
    fn test_new_rejects_non_http() {
        assert!(matches!(
            HttpImageProvider::new("ftp://nope"),
            Err(ImageError::Config(_))
        ));
    }
}
