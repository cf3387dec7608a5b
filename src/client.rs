//! HTTP client wrapper for the backend API

use crate::config::Config;
use crate::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON API client bound to a configured base URL
///
/// Built once per run. When credential inclusion is enabled the client
/// keeps a cookie store, so the session cookie set by the login endpoint
/// is sent on subsequent probes.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the application configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("{}/{}", crate::PKG_NAME, crate::VERSION))
            .cookie_store(config.include_credentials)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET request and decode the JSON response body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Ok(response.json().await?)
    }

    /// Issue a POST request with a JSON body and decode the JSON response
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(self.endpoint(path)).json(body).send().await?;
        Ok(response.json().await?)
    }
}
