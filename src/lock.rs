//! Bold Smart Lock API client - the main public API.
//!
//! `BoldSmartLock` maps each lock operation onto exactly one API call and
//! classifies the server's `errorCode` into a typed [`BoldError`]. It holds no
//! state besides the injected transport and the API base URL, so one instance
//! can serve concurrent callers.

use crate::client::auth::AuthenticatedRequest;
use crate::protocol::endpoints::Endpoint;
use crate::protocol::models::{error_code, first_element, ErrorCode};
use crate::BoldError;
use serde_json::Value;
use tracing::{debug, warn};

/// Client for the Bold Smart Lock API.
pub struct BoldSmartLock<A> {
    auth: A,
    api_url: String,
}

impl<A: AuthenticatedRequest> BoldSmartLock<A> {
    /// Create a client against the base URL reported by the transport.
    pub fn new(auth: A) -> Self {
        let api_url = auth.api_url().to_string();
        Self::with_api_url(auth, &api_url)
    }

    /// Create a client against a different API base URL.
    pub fn with_api_url(auth: A, api_url: &str) -> Self {
        Self {
            auth,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the injected transport.
    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Get all effective device permissions.
    ///
    /// The body is returned as-is.
    pub async fn get_device_permissions(&self) -> Result<Value, BoldError> {
        self.call(Endpoint::effective_device_permissions(&self.api_url))
            .await
    }

    /// Remotely activate a device, using a gateway.
    ///
    /// # Errors
    /// - `TooManyRequests` - rate limited
    /// - `GatewayNotFound` - no gateway serves this device
    /// - `Activation` - any other non-`OK` code
    pub async fn remote_activation(&self, device_id: u64) -> Result<Value, BoldError> {
        let body = self
            .call(Endpoint::remote_activation(&self.api_url, device_id))
            .await?;

        let error = match error_code(&body)? {
            ErrorCode::Ok => return Ok(body),
            ErrorCode::TooManyRequests => BoldError::TooManyRequests,
            ErrorCode::GatewayNotFound => BoldError::GatewayNotFound,
            other => BoldError::Activation {
                code: other.as_str().to_string(),
            },
        };
        Err(rejected("remote activation", error))
    }

    /// Remotely deactivate a device, using a gateway.
    ///
    /// # Errors
    /// - `TooManyRequests` - rate limited
    /// - `DeviceFirmwareOutdated` - firmware does not support remote deactivation
    /// - `GatewayNotFound` - no gateway serves this device
    /// - `Deactivation` - any other non-`OK` code
    pub async fn remote_deactivation(&self, device_id: u64) -> Result<Value, BoldError> {
        let body = self
            .call(Endpoint::remote_deactivation(&self.api_url, device_id))
            .await?;

        let error = match error_code(&body)? {
            ErrorCode::Ok => return Ok(body),
            ErrorCode::TooManyRequests => BoldError::TooManyRequests,
            ErrorCode::DeviceFirmwareOutdated => BoldError::DeviceFirmwareOutdated,
            ErrorCode::GatewayNotFound => BoldError::GatewayNotFound,
            other => BoldError::Deactivation {
                code: other.as_str().to_string(),
            },
        };
        Err(rejected("remote deactivation", error))
    }

    /// Retrieve the current status of a gateway.
    ///
    /// # Errors
    /// - `TooManyRequests` - rate limited
    /// - `GatewayUnreachable` - the gateway is offline
    /// - `GatewayStatus` - any other non-`OK` code
    pub async fn gateway_current_status(&self, gateway_id: u64) -> Result<Value, BoldError> {
        let body = self
            .call(Endpoint::gateway_current_status(&self.api_url, gateway_id))
            .await?;

        let error = match error_code(&body)? {
            ErrorCode::Ok => return Ok(body),
            ErrorCode::TooManyRequests => BoldError::TooManyRequests,
            ErrorCode::GatewayUnreachable => BoldError::GatewayUnreachable,
            other => BoldError::GatewayStatus {
                code: other.as_str().to_string(),
            },
        };
        Err(rejected("gateway status", error))
    }

    /// Get the handshake for the device, used to authenticate over BLE.
    pub async fn get_device_handshake(&self, device_id: u64) -> Result<Value, BoldError> {
        let body = self
            .call(Endpoint::device_handshake(&self.api_url, device_id))
            .await?;
        first_element(body)
    }

    /// Get the payload required to activate the device over BLE.
    pub async fn get_activate_device_payload(&self, device_id: u64) -> Result<Value, BoldError> {
        let body = self
            .call(Endpoint::activate_device_payload(&self.api_url, device_id))
            .await?;
        first_element(body)
    }

    /// Issue one request and decode its JSON body.
    async fn call(&self, endpoint: Endpoint) -> Result<Value, BoldError> {
        debug!(method = %endpoint.method, url = %endpoint.url, "Bold API call");
        let response = self.auth.request(endpoint.method, &endpoint.url).await?;
        response.json()
    }
}

fn rejected(operation: &str, error: BoldError) -> BoldError {
    warn!(operation, %error, "Bold API rejected request");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::auth::StubAuth;
    use reqwest::Method;
    use serde_json::json;

    fn lock_with(body: Value) -> BoldSmartLock<StubAuth> {
        BoldSmartLock::new(StubAuth::json(body))
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let auth = StubAuth::json(json!({}));
        let lock = BoldSmartLock::with_api_url(auth, "http://localhost:8080/");
        assert_eq!(lock.api_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_get_device_permissions_passes_body_through() {
        let permissions = json!([{"device": {"id": 1}, "permissions": ["unlock"]}]);
        let lock = lock_with(permissions.clone());

        assert_eq!(lock.get_device_permissions().await.unwrap(), permissions);
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::GET,
                "https://api.boldsmartlock.com/v1/effective-device-permissions".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_get_device_permissions_ignores_error_code() {
        let body = json!({"errorCode": "TooManyRequests"});
        let lock = lock_with(body.clone());

        assert_eq!(lock.get_device_permissions().await.unwrap(), body);
        assert_eq!(lock.auth().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_activation_ok() {
        let body = json!({"errorCode": "OK", "activatedAt": "2024-01-01T00:00:00Z"});
        let lock = lock_with(body.clone());

        assert_eq!(lock.remote_activation(12).await.unwrap(), body);
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::POST,
                "https://api.boldsmartlock.com/v1/devices/12/remote-activation".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_remote_activation_error_codes() {
        let result = lock_with(json!({"errorCode": "TooManyRequests"}))
            .remote_activation(1)
            .await;
        assert!(matches!(result, Err(BoldError::TooManyRequests)));

        let result = lock_with(json!({"errorCode": "gatewayNotFoundError"}))
            .remote_activation(1)
            .await;
        assert!(matches!(result, Err(BoldError::GatewayNotFound)));

        let result = lock_with(json!({"errorCode": "Unknown"}))
            .remote_activation(1)
            .await;
        assert!(matches!(result, Err(BoldError::Activation { ref code }) if code == "Unknown"));
    }

    #[tokio::test]
    async fn test_remote_activation_does_not_know_firmware_code() {
        let result = lock_with(json!({"errorCode": "DeviceFirmwareOutdated"}))
            .remote_activation(1)
            .await;
        assert!(
            matches!(result, Err(BoldError::Activation { ref code }) if code == "DeviceFirmwareOutdated")
        );
    }

    #[tokio::test]
    async fn test_remote_deactivation_ok() {
        let body = json!({"errorCode": "OK"});
        let lock = lock_with(body.clone());

        assert_eq!(lock.remote_deactivation(12).await.unwrap(), body);
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::POST,
                "https://api.boldsmartlock.com/v1/devices/12/remote-deactivation".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_remote_deactivation_error_codes() {
        let result = lock_with(json!({"errorCode": "TooManyRequests"}))
            .remote_deactivation(1)
            .await;
        assert!(matches!(result, Err(BoldError::TooManyRequests)));

        let result = lock_with(json!({"errorCode": "DeviceFirmwareOutdated"}))
            .remote_deactivation(1)
            .await;
        assert!(matches!(result, Err(BoldError::DeviceFirmwareOutdated)));

        let result = lock_with(json!({"errorCode": "gatewayNotFoundError"}))
            .remote_deactivation(1)
            .await;
        assert!(matches!(result, Err(BoldError::GatewayNotFound)));

        let result = lock_with(json!({"errorCode": "Unknown"}))
            .remote_deactivation(1)
            .await;
        assert!(matches!(result, Err(BoldError::Deactivation { ref code }) if code == "Unknown"));
    }

    #[tokio::test]
    async fn test_gateway_current_status_ok() {
        let body = json!({"errorCode": "OK", "online": true});
        let lock = lock_with(body.clone());

        assert_eq!(lock.gateway_current_status(5).await.unwrap(), body);
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::GET,
                "https://api.boldsmartlock.com/v1/gateways/5/current-status".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_gateway_current_status_error_codes() {
        let result = lock_with(json!({"errorCode": "TooManyRequests"}))
            .gateway_current_status(5)
            .await;
        assert!(matches!(result, Err(BoldError::TooManyRequests)));

        let result = lock_with(json!({"errorCode": "GatewayUnreachable"}))
            .gateway_current_status(5)
            .await;
        assert!(matches!(result, Err(BoldError::GatewayUnreachable)));

        let result = lock_with(json!({"errorCode": "gatewayNotFoundError"}))
            .gateway_current_status(5)
            .await;
        assert!(
            matches!(result, Err(BoldError::GatewayStatus { ref code }) if code == "gatewayNotFoundError")
        );
    }

    #[tokio::test]
    async fn test_missing_error_code() {
        let lock = lock_with(json!({"status": "done"}));
        assert!(matches!(
            lock.remote_activation(1).await,
            Err(BoldError::MissingErrorCode)
        ));
        assert!(matches!(
            lock.remote_deactivation(1).await,
            Err(BoldError::MissingErrorCode)
        ));
        assert!(matches!(
            lock.gateway_current_status(1).await,
            Err(BoldError::MissingErrorCode)
        ));
    }

    #[tokio::test]
    async fn test_get_device_handshake() {
        let lock = lock_with(json!([{"key": "abc"}]));
        assert_eq!(lock.get_device_handshake(99).await.unwrap(), json!({"key": "abc"}));
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::GET,
                "https://api.boldsmartlock.com/v1/controller/v0/handshakes?deviceId=99".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_get_device_handshake_empty() {
        let lock = lock_with(json!([]));
        assert!(matches!(
            lock.get_device_handshake(99).await,
            Err(BoldError::EmptyResult)
        ));
    }

    #[tokio::test]
    async fn test_get_activate_device_payload() {
        let lock = lock_with(json!([{"payload": "AQID"}, {"payload": "BAUG"}]));
        assert_eq!(
            lock.get_activate_device_payload(99).await.unwrap(),
            json!({"payload": "AQID"})
        );
        assert_eq!(
            lock.auth().requests(),
            vec![(
                Method::GET,
                "https://api.boldsmartlock.com/v1/controller/v0/commands/activate-device?deviceId=99"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_get_activate_device_payload_empty() {
        let lock = lock_with(json!([]));
        assert!(matches!(
            lock.get_activate_device_payload(99).await,
            Err(BoldError::EmptyResult)
        ));
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let lock = BoldSmartLock::new(StubAuth::transport_error("connection reset"));

        let result = lock.remote_activation(1).await;
        assert!(matches!(result, Err(BoldError::Transport(ref m)) if m == "connection reset"));

        let result = lock.get_device_handshake(1).await;
        assert!(matches!(result, Err(BoldError::Transport(ref m)) if m == "connection reset"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_protocol_error() {
        let lock = BoldSmartLock::new(StubAuth::raw("<html>oops</html>"));
        assert!(matches!(
            lock.get_device_permissions().await,
            Err(BoldError::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn test_one_request_per_call() {
        let lock = lock_with(json!({"errorCode": "TooManyRequests"}));
        let _ = lock.remote_activation(1).await;
        let _ = lock.remote_deactivation(1).await;
        assert_eq!(lock.auth().requests().len(), 2);
    }
}
