pub mod endpoints;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};

/// HTTP client wrapper for the content API.
#[derive(Debug, Clone)]
pub struct FeedHttpClient {
    client: Client,
    base_url: String,
}

impl FeedHttpClient {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let url = Url::parse(&config.base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON resource.
    ///
    /// Non-2xx responses become [`FeedError::Http`]; a body that fails to
    /// parse as `T` becomes [`FeedError::Decode`] (fatal for the page).
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FeedError::Http {
                status,
                message: body,
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(FeedError::Decode)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
