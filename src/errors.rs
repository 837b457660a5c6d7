//! Bold Smart Lock error types.

use thiserror::Error;

/// Errors returned by the Bold Smart Lock client.
#[derive(Debug, Error)]
pub enum BoldError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API rejected the call because of rate limiting (`TooManyRequests`).
    #[error("Too many requests, rate limit reached")]
    TooManyRequests,

    /// No gateway is paired with the device (`gatewayNotFoundError`).
    #[error("Gateway not found for device")]
    GatewayNotFound,

    /// The gateway did not respond to the API (`GatewayUnreachable`).
    #[error("Gateway unreachable")]
    GatewayUnreachable,

    /// The device firmware is too old for remote deactivation (`DeviceFirmwareOutdated`).
    #[error("Device firmware outdated")]
    DeviceFirmwareOutdated,

    /// Remote activation failed with an unrecognized error code.
    #[error("Remote activation failed: {code}")]
    Activation {
        /// Error code reported by the API.
        code: String,
    },

    /// Remote deactivation failed with an unrecognized error code.
    #[error("Remote deactivation failed: {code}")]
    Deactivation {
        /// Error code reported by the API.
        code: String,
    },

    /// Gateway status lookup failed with an unrecognized error code.
    #[error("Gateway current status failed: {code}")]
    GatewayStatus {
        /// Error code reported by the API.
        code: String,
    },

    /// Response body has no usable `errorCode` field.
    #[error("Response is missing the errorCode field")]
    MissingErrorCode,

    /// Handshake or command endpoint returned an empty list.
    #[error("API returned an empty result list")]
    EmptyResult,

    /// HTTP transport error communicating with the API.
    #[error("Bold API transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status.
    #[error("Bold API returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, lossily decoded.
        body: String,
    },

    /// Failed to decode the API response.
    #[error("Protocol error: {0}")]
    Protocol(String),
}
