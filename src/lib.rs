//! # Bold Smart Lock
//!
//! **Async client for the [Bold](https://boldsmartlock.com) smart lock API.**
//!
//! The client covers the calls a home-automation integration needs:
//! permission lookup, remote activation and deactivation through a gateway,
//! gateway status, and retrieval of the handshake and activation payloads used
//! for local BLE authentication with the lock.
//!
//! ## Features
//!
//! - **Typed failures** — server `errorCode`s become [`BoldError`] variants
//! - **Injected transport** — every call goes through an [`AuthenticatedRequest`]
//! - **Stateless** — one request per call, no caching, no retries
//!
//! ## Quickstart
//!
//! ```no_run
//! use bold_smart_lock::{BearerAuth, BoldConfig, BoldError, BoldSmartLock, StaticToken};
//!
//! # async fn run() -> Result<(), BoldError> {
//! let auth = BearerAuth::new(&BoldConfig::default(), StaticToken::new("access-token"))?;
//! let lock = BoldSmartLock::new(auth);
//!
//! match lock.remote_activation(12345).await {
//!     Ok(body) => println!("Activated: {}", body),
//!     Err(BoldError::TooManyRequests) => println!("Rate limited, try again later"),
//!     Err(BoldError::GatewayNotFound) => println!("Pair a gateway with this lock first"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Token acquisition and refresh are left to the caller. Supply an
//! [`AccessTokenProvider`] to [`BearerAuth`], or implement
//! [`AuthenticatedRequest`] directly to use another HTTP stack.

#![deny(warnings)]
#![deny(missing_docs)]

// Core modules
pub mod config;
pub mod errors;

// Protocol layer
pub mod protocol;

// Client layer
pub mod client;

// Lock API (main public API)
pub mod lock;

// Re-exports for public API
pub use client::auth::{ApiResponse, AuthenticatedRequest};
pub use client::http::{AccessTokenProvider, BearerAuth, StaticToken};
pub use config::BoldConfig;
pub use errors::BoldError;
pub use lock::BoldSmartLock;
pub use protocol::models::ErrorCode;

#[cfg(any(test, feature = "test-seams"))]
pub use client::auth::StubAuth;
