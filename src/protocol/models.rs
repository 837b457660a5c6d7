//! Bold API response codes and body helpers.

use crate::BoldError;
use serde_json::Value;

/// Value of the `errorCode` field carried by command and status responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// `"OK"`
    Ok,
    /// `"TooManyRequests"`
    TooManyRequests,
    /// `"gatewayNotFoundError"`
    GatewayNotFound,
    /// `"DeviceFirmwareOutdated"`
    DeviceFirmwareOutdated,
    /// `"GatewayUnreachable"`
    GatewayUnreachable,
    /// Any code this client does not recognize.
    Other(String),
}

impl ErrorCode {
    /// Map the wire string onto a code. Matching is case-sensitive.
    pub fn parse(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "TooManyRequests" => Self::TooManyRequests,
            "gatewayNotFoundError" => Self::GatewayNotFound,
            "DeviceFirmwareOutdated" => Self::DeviceFirmwareOutdated,
            "GatewayUnreachable" => Self::GatewayUnreachable,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire string for this code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::TooManyRequests => "TooManyRequests",
            Self::GatewayNotFound => "gatewayNotFoundError",
            Self::DeviceFirmwareOutdated => "DeviceFirmwareOutdated",
            Self::GatewayUnreachable => "GatewayUnreachable",
            Self::Other(code) => code,
        }
    }
}

/// Read the `errorCode` field from a decoded response body.
///
/// A missing field or a non-string value yields `MissingErrorCode`.
pub fn error_code(body: &Value) -> Result<ErrorCode, BoldError> {
    body.get("errorCode")
        .and_then(Value::as_str)
        .map(ErrorCode::parse)
        .ok_or(BoldError::MissingErrorCode)
}

/// Take the first element of a JSON array body.
pub fn first_element(body: Value) -> Result<Value, BoldError> {
    match body {
        Value::Array(items) => items.into_iter().next().ok_or(BoldError::EmptyResult),
        other => Err(BoldError::Protocol(format!(
            "Expected a JSON array, got: {}",
            other
        ))),
    }
}
