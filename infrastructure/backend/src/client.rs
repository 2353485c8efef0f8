use std::time::Duration;

use business::domain::errors::BackendError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// Shared HTTP client for the storefront backend.
pub struct BackendClient {
    pub client: Client,
    pub base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::unavailable(format!("invalid base url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::unavailable("base url cannot hold paths"));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::unavailable(format!("http client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base url, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fails on transport errors and non-2xx statuses.
    pub fn check(result: Result<Response, reqwest::Error>) -> Result<Response, BackendError> {
        let response = result.map_err(|e| BackendError::unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::rejected(status.as_u16()));
        }
        Ok(response)
    }

    /// Like `check`, then decodes the body as `T`.
    pub async fn json<T: DeserializeOwned>(
        result: Result<Response, reqwest::Error>,
    ) -> Result<T, BackendError> {
        let response = Self::check(result)?;
        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::unavailable(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| BackendError::malformed(e.to_string()))
    }
}
