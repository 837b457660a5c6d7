//! Authenticated request seam.
//!
//! `BoldSmartLock` never talks to the network directly. It hands a method and
//! an absolute URL to an [`AuthenticatedRequest`] implementation, which owns
//! credentials, headers and transport.

use crate::protocol::endpoints::API_URL;
use crate::BoldError;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Raw API response returned by an [`AuthenticatedRequest`] implementation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Build a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value, BoldError> {
        self.decode()
    }

    /// Decode the body into a caller-chosen type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, BoldError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| BoldError::Protocol(format!("Failed to parse response body: {}", e)))
    }
}

/// Performs an authenticated request against the Bold API.
///
/// Implementations attach credentials and report transport failures as
/// `BoldError`. The client propagates those errors unchanged.
#[async_trait]
pub trait AuthenticatedRequest: Send + Sync {
    /// Send `method` to `url` (already including the API base) and return the response.
    async fn request(&self, method: Method, url: &str) -> Result<ApiResponse, BoldError>;

    /// Base URL this transport is meant to talk to.
    fn api_url(&self) -> &str {
        API_URL
    }
}

#[async_trait]
impl<T: AuthenticatedRequest + ?Sized> AuthenticatedRequest for Arc<T> {
    async fn request(&self, method: Method, url: &str) -> Result<ApiResponse, BoldError> {
        (**self).request(method, url).await
    }

    fn api_url(&self) -> &str {
        (**self).api_url()
    }
}

#[cfg(any(test, feature = "test-seams"))]
pub use stub::StubAuth;

#[cfg(any(test, feature = "test-seams"))]
mod stub {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    enum Reply {
        Body(Vec<u8>),
        Transport(String),
    }

    /// Recording stub collaborator for deterministic tests.
    ///
    /// Every request gets the same canned reply; sent requests are recorded.
    #[derive(Debug)]
    pub struct StubAuth {
        reply: Reply,
        requests: Mutex<Vec<(Method, String)>>,
    }

    impl StubAuth {
        /// Reply with `body` serialized as JSON and status 200.
        pub fn json(body: Value) -> Self {
            Self::raw(body.to_string())
        }

        /// Reply with a raw body and status 200.
        pub fn raw(body: impl Into<Vec<u8>>) -> Self {
            Self {
                reply: Reply::Body(body.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Fail every request with `BoldError::Transport(message)`.
        pub fn transport_error(message: &str) -> Self {
            Self {
                reply: Reply::Transport(message.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Requests seen so far, in order.
        pub fn requests(&self) -> Vec<(Method, String)> {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone()
        }
    }

    #[async_trait]
    impl AuthenticatedRequest for StubAuth {
        async fn request(&self, method: Method, url: &str) -> Result<ApiResponse, BoldError> {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push((method, url.to_string()));

            match &self.reply {
                Reply::Body(body) => Ok(ApiResponse::new(200, body.clone())),
                Reply::Transport(message) => Err(BoldError::Transport(message.clone())),
            }
        }
    }
}
