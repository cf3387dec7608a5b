//! Backend health probe

use super::{Probe, ProbeEntry};
use crate::client::ApiClient;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Response body of `GET /health`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Checks that the backend is up by calling `GET {base}/health`
///
/// The endpoint is healthy iff the response's `status` field is the
/// literal string `"OK"`.
pub struct HealthProbe;

#[async_trait]
impl Probe for HealthProbe {
    fn name(&self) -> &'static str {
        "health"
    }

    fn description(&self) -> &'static str {
        "Testing backend connection..."
    }

    async fn run(&self, client: &ApiClient) -> Result<Vec<ProbeEntry>> {
        let response: HealthResponse = client.get_json("/health").await?;

        if response.status == "OK" {
            Ok(vec![
                ProbeEntry::success("Backend server is running!"),
                ProbeEntry::success(format!(
                    "Server message: {}",
                    response.message.as_deref().unwrap_or("")
                )),
            ])
        } else {
            Err(AppError::probe_execution(format!(
                "Backend responded but with unexpected data (status: '{}')",
                response.status
            )))
        }
    }
}
