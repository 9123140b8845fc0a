//! # PushSecure Client
//!
//! A typed async client for the PushSecure push notification service.
//!
//! ## Features
//!
//! - **Accounts**: authenticate (or create) an account and arm the client
//!   with its session token
//! - **Devices**: register, list, update and delete GCM and APNS devices
//! - **Tokens**: issue and revoke push tokens addressing a device
//! - **Messages**: send a payload to a push token
//!
//! Every call is attempted exactly once; there is no retry or caching layer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pushsecure_client::PushSecureClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PushSecureClient::new("https://push.example.com")?;
//!
//!     let account = client
//!         .authenticate_account("alice", "correct horse", None)
//!         .await?;
//!     client.arm(&account);
//!
//!     let device = client
//!         .create_device("gcm-registration-id", Some("Pixel"), None)
//!         .await?;
//!     let token = client.create_token(&device, Some("chat")).await?;
//!
//!     client.send_message(&token.token, Some("{\"alert\":\"hi\"}")).await?;
//!
//!     for device in client.get_all_devices().await? {
//!         println!("{} ({})", device.id, device.platform);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use pushsecure_client::{PushSecureClient, PushSecureConfig};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PushSecureConfig::builder("https://push.example.com")
//!     .timeout(Duration::from_secs(10))
//!     .build();
//! let client = PushSecureClient::with_config(config)?;
//!
//! // Or from PUSHSECURE_API_HOST / PUSHSECURE_TOKEN
//! let client = PushSecureClient::from_env()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod models;
mod transport;

pub mod date;
pub mod routes;

pub use client::PushSecureClient;
pub use config::{DEFAULT_ENV_PREFIX, PushSecureConfig, PushSecureConfigBuilder};
pub use error::{PushSecureError, Result};
pub use models::{Account, Device, DeviceList, Message, Page, Platform, PushToken, TokenList};
pub use transport::{HttpTransport, RequestBuilder, Response};

// Re-export common types
pub use http::{Method, StatusCode};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use pushsecure_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::PushSecureClient;
    pub use crate::config::PushSecureConfig;
    pub use crate::error::{PushSecureError, Result};
    pub use crate::models::{
        Account, Device, DeviceList, Message, Page, Platform, PushToken, TokenList,
    };
}
