//! Login probe using the configured demo credentials

use super::{Probe, ProbeEntry, UserInfo};
use crate::client::ApiClient;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response body of `POST /login`
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<UserInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// Attempts a login via `POST {base}/login`
///
/// Succeeds iff the response's `success` field is true. On failure the
/// server-supplied `error` text is carried into the error record.
pub struct LoginProbe {
    email: String,
    password: String,
}

impl LoginProbe {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[async_trait]
impl Probe for LoginProbe {
    fn name(&self) -> &'static str {
        "login"
    }

    fn description(&self) -> &'static str {
        "Testing login with demo credentials..."
    }

    async fn run(&self, client: &ApiClient) -> Result<Vec<ProbeEntry>> {
        let body = LoginRequest {
            email: &self.email,
            password: &self.password,
        };
        let response: LoginResponse = client.post_json("/login", &body).await?;

        if response.success {
            let name = response
                .user
                .map(|u| u.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "unknown user".to_string());

            Ok(vec![
                ProbeEntry::success("Login successful!"),
                ProbeEntry::success(format!("Welcome {}!", name)),
            ])
        } else {
            let reason = response
                .error
                .unwrap_or_else(|| "no error message provided".to_string());
            Err(AppError::auth(format!("Login failed: {}", reason)))
        }
    }
}
