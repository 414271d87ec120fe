//! HTTP client for the Groupcast mass-message endpoint.
//!
//! Provides a minimal client with a generic multipart POST helper and the
//! domain method that turns a [`MessageDraft`] into one request. The composer
//! uses it through the [`MessageTransport`] trait; the CLI builds it from
//! [`ComposerConfig`].

pub mod api;

use anyhow::{Context, Result};
use groupcast_core::{ComposerConfig, TransportError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use api::build_form;
pub use groupcast_core::{MessageDraft, MessageTransport, SubmissionResponse};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the mass-message endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    endpoint: String,
}

impl ApiClient {
    pub fn new(base_url: String, endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint,
        })
    }

    pub fn from_config(config: &ComposerConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.endpoint.clone(),
            config.request_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST multipart form and deserialize response.
    ///
    /// Non-2xx statuses and bodies that are not the expected JSON are
    /// reported as [`TransportError`]s.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, TransportError> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_chars(error_text.trim(), MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Truncate to at most `max_chars` characters, appending "..." if truncated.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_and_exact() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_is_char_safe() {
        assert_eq!(truncate_chars("hello world", 8), "hello...");
        assert_eq!(truncate_chars("xatolik yuz berdi", 6), "xat...");
        assert_eq!(truncate_chars("ўзбекча матн", 5), "ўз...");
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new(
            "http://localhost:8000/".to_string(),
            "/send-mass-message/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.build_url(client.endpoint()),
            "http://localhost:8000/send-mass-message/"
        );
    }
}
