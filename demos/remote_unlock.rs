//! Remote activation example.
//!
//! Activates a lock through its gateway and reports the outcome.
//!
//! # Running
//!
//! ```bash
//! export BOLD_ACCESS_TOKEN="your-access-token"
//! export BOLD_DEVICE_ID="12345"
//! cargo run --example remote_unlock
//! ```

use bold_smart_lock::{BearerAuth, BoldConfig, BoldError, BoldSmartLock, StaticToken};

#[tokio::main]
async fn main() {
    let token =
        std::env::var("BOLD_ACCESS_TOKEN").expect("Set BOLD_ACCESS_TOKEN environment variable");
    let device_id: u64 = std::env::var("BOLD_DEVICE_ID")
        .expect("Set BOLD_DEVICE_ID environment variable")
        .parse()
        .expect("BOLD_DEVICE_ID must be a number");

    let config = BoldConfig {
        app_name: "remote-unlock-example".to_string(),
        ..BoldConfig::default()
    };

    let auth = match BearerAuth::new(&config, StaticToken::new(token)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let lock = BoldSmartLock::new(auth);

    match lock.remote_activation(device_id).await {
        Ok(body) => {
            println!("✓ Device {} activated", device_id);
            println!("  Response: {}", body);
        }
        Err(e) => {
            match &e {
                BoldError::TooManyRequests => {
                    eprintln!("Rate limited, back off before retrying");
                }
                BoldError::GatewayNotFound => {
                    eprintln!("No gateway paired with this lock");
                }
                BoldError::Http { status: 401, .. } => {
                    eprintln!("Access token rejected, log in again");
                }
                _ => {
                    eprintln!("Activation error: {}", e);
                }
            }
            std::process::exit(1);
        }
    }
}
