//! Reqwest-based authenticated transport for the Bold API.
//!
//! [`BearerAuth`] is the stock [`AuthenticatedRequest`] implementation. It
//! asks an [`AccessTokenProvider`] for a token on every call, so token refresh
//! stays the provider's concern.

use crate::client::auth::{ApiResponse, AuthenticatedRequest};
use crate::config::BoldConfig;
use crate::BoldError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Method, Response};
use std::fmt;
use std::time::Duration;

/// Source of OAuth access tokens for the Bold API.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Return a currently valid access token.
    async fn access_token(&self) -> Result<String, BoldError>;
}

/// Fixed access token, for callers that manage refresh themselves.
#[derive(Clone)]
pub struct StaticToken(String);

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"[REDACTED]").finish()
    }
}

impl StaticToken {
    /// Wrap an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, BoldError> {
        Ok(self.0.clone())
    }
}

impl ApiResponse {
    /// Read status and body from a reqwest Response.
    async fn from_response(response: Response) -> Result<Self, BoldError> {
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| BoldError::Transport(format!("Failed to read body: {}", e)))?
            .to_vec();

        Ok(Self { status, body })
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Bearer-token HTTP transport.
pub struct BearerAuth<P> {
    client: Client,
    api_url: String,
    user_agent: String,
    token_provider: P,
    timeout: Duration,
}

impl<P: AccessTokenProvider> BearerAuth<P> {
    /// Create a transport from config and a token provider.
    pub fn new(config: &BoldConfig, token_provider: P) -> Result<Self, BoldError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BoldError::Transport(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            user_agent: build_user_agent(config),
            token_provider,
            timeout: config.timeout,
        })
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl<P: AccessTokenProvider> AuthenticatedRequest for BearerAuth<P> {
    async fn request(&self, method: Method, url: &str) -> Result<ApiResponse, BoldError> {
        let token = self.token_provider.access_token().await?;

        let response = self
            .client
            .request(method, url)
            .bearer_auth(token)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| BoldError::Transport(format!("Request failed: {}", e)))?;

        let response = ApiResponse::from_response(response).await?;

        if !response.is_success() {
            return Err(BoldError::Http {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response)
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Build a User-Agent string from config.
///
/// Format: `<app>/bold-smart-lock-<version>`
pub fn build_user_agent(config: &BoldConfig) -> String {
    format!(
        "{}/bold-smart-lock-{}",
        config.app_name,
        env!("CARGO_PKG_VERSION")
    )
}
