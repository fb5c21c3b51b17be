//! HTTP Source
//!
//! `reqwest` runs on top of the browser `fetch` API on wasm32.

use crate::error::{AppError, AppResult};

/// Anything that can GET a URL and hand back the body text
#[allow(async_fn_in_trait)]
pub trait HttpSource {
    /// Non-success statuses are errors
    async fn get_text(&self, url: &str) -> AppResult<String>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpSource for HttpClient {
    async fn get_text(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response.text().await.map_err(|e| AppError::network(url, e))
    }
}
