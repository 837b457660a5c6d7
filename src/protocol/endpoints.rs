//! Bold API service paths and endpoint construction.

use reqwest::Method;

/// Production base URL of the Bold API.
pub const API_URL: &str = "https://api.boldsmartlock.com";

/// Device service path.
pub const DEVICE_SERVICE: &str = "/v1/devices";

/// Gateway service path.
pub const GATEWAY_SERVICE: &str = "/v1/gateways";

/// Effective device permissions service path.
pub const EFFECTIVE_DEVICE_PERMISSIONS_SERVICE: &str = "/v1/effective-device-permissions";

/// Device handshakes service path.
pub const HANDSHAKES_DEVICE_SERVICE: &str = "/v1/controller/v0/handshakes";

/// Activate-device command service path.
pub const ACTIVATE_DEVICE_COMMAND_SERVICE: &str = "/v1/controller/v0/commands/activate-device";

/// A fully resolved API call: HTTP method plus absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method.
    pub method: Method,

    /// Absolute URL including any query string.
    pub url: String,
}

impl Endpoint {
    fn new(method: Method, url: String) -> Self {
        Self { method, url }
    }

    /// `GET /v1/effective-device-permissions`
    pub fn effective_device_permissions(api_url: &str) -> Self {
        Self::new(
            Method::GET,
            format!("{}{}", api_url, EFFECTIVE_DEVICE_PERMISSIONS_SERVICE),
        )
    }

    /// `POST /v1/devices/{device_id}/remote-activation`
    pub fn remote_activation(api_url: &str, device_id: u64) -> Self {
        Self::new(
            Method::POST,
            format!("{}{}/{}/remote-activation", api_url, DEVICE_SERVICE, device_id),
        )
    }

    /// `POST /v1/devices/{device_id}/remote-deactivation`
    pub fn remote_deactivation(api_url: &str, device_id: u64) -> Self {
        Self::new(
            Method::POST,
            format!("{}{}/{}/remote-deactivation", api_url, DEVICE_SERVICE, device_id),
        )
    }

    /// `GET /v1/gateways/{gateway_id}/current-status`
    pub fn gateway_current_status(api_url: &str, gateway_id: u64) -> Self {
        Self::new(
            Method::GET,
            format!("{}{}/{}/current-status", api_url, GATEWAY_SERVICE, gateway_id),
        )
    }

    /// `GET /v1/controller/v0/handshakes?deviceId={device_id}`
    pub fn device_handshake(api_url: &str, device_id: u64) -> Self {
        Self::new(
            Method::GET,
            format!("{}{}?deviceId={}", api_url, HANDSHAKES_DEVICE_SERVICE, device_id),
        )
    }

    /// `GET /v1/controller/v0/commands/activate-device?deviceId={device_id}`
    pub fn activate_device_payload(api_url: &str, device_id: u64) -> Self {
        Self::new(
            Method::GET,
            format!(
                "{}{}?deviceId={}",
                api_url, ACTIVATE_DEVICE_COMMAND_SERVICE, device_id
            ),
        )
    }
}
