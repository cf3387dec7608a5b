//! Authentication status probe

use super::{Probe, ProbeEntry, UserInfo};
use crate::client::ApiClient;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Response body of `GET /auth/status`
#[derive(Debug, Deserialize)]
struct AuthStatusResponse {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    user: Option<UserInfo>,
}

/// Checks the current session via `GET {base}/auth/status`
///
/// Three outcomes: authenticated (success), not authenticated (an
/// informational entry, not a failure), or a transport/parse error.
pub struct AuthStatusProbe;

#[async_trait]
impl Probe for AuthStatusProbe {
    fn name(&self) -> &'static str {
        "auth-status"
    }

    fn description(&self) -> &'static str {
        "Testing authentication status..."
    }

    async fn run(&self, client: &ApiClient) -> Result<Vec<ProbeEntry>> {
        let response: AuthStatusResponse = client.get_json("/auth/status").await?;

        if response.authenticated {
            let user = response.user.unwrap_or(UserInfo {
                name: "unknown user".to_string(),
                email: String::new(),
            });

            Ok(vec![
                ProbeEntry::success("User is authenticated"),
                ProbeEntry::success(format!("User: {} ({})", user.name, user.email)),
            ])
        } else {
            Ok(vec![ProbeEntry::info("User is not authenticated")])
        }
    }
}
