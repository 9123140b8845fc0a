//! PushSecure API client.

use std::sync::Arc;

use http::Method;
use parking_lot::RwLock;
use tracing::{debug, warn};
use url::Url;

use crate::models::{Credentials, DeviceRegistration, MessageRequest, TokenRequest};
use crate::routes::Route;
use crate::{
    Account, Device, DeviceList, HttpTransport, Message, Platform, PushSecureConfig, PushToken,
    RequestBuilder, Result, TokenList,
};

/// Client for the PushSecure push notification service.
///
/// Clones share the connection pool and the session token, so arming one
/// clone arms them all.
#[derive(Clone)]
pub struct PushSecureClient {
    transport: HttpTransport,
    token: Arc<RwLock<Option<String>>>,
}

impl PushSecureClient {
    /// Create an unarmed client for the given API host.
    pub fn new(api_host: impl Into<String>) -> Result<Self> {
        Self::with_config(PushSecureConfig::new(api_host))
    }

    /// Create a client armed with `account`'s session token.
    pub fn with_account(api_host: impl Into<String>, account: Account) -> Result<Self> {
        Self::with_config(PushSecureConfig::builder(api_host).account(account).build())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: PushSecureConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let token = config.account.map(|account| account.token);

        debug!(
            api_host = %transport.base_url(),
            armed = token.is_some(),
            "Created PushSecure client"
        );

        Ok(Self {
            transport,
            token: Arc::new(RwLock::new(token)),
        })
    }

    /// Create a client from `PUSHSECURE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(PushSecureConfig::from_env()?)
    }

    /// Get the API base URL.
    pub fn api_host(&self) -> &Url {
        self.transport.base_url()
    }

    /// Use `account`'s session token for every request built from now on.
    pub fn arm(&self, account: &Account) {
        *self.token.write() = Some(account.token.clone());
    }

    /// Forget the session token.
    pub fn disarm(&self) {
        *self.token.write() = None;
    }

    /// Check if a session token is set.
    pub fn is_armed(&self) -> bool {
        self.token.read().is_some()
    }

    /// Get the current session token.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Build a request authorized with the token current at this moment.
    fn request(&self, method: Method, route: Route) -> RequestBuilder<'_> {
        let token = self.token();
        self.transport
            .request(method, route)
            .token_auth(token.as_deref())
    }

    /// Authenticate with the given credentials, creating the account if none
    /// matches.
    ///
    /// The returned [`Account`] should be passed to [`arm`](Self::arm) before
    /// any other call.
    pub async fn authenticate_account(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<Account> {
        self.request(Method::POST, Route::accounts())
            .json(&Credentials {
                username,
                password,
                email,
            })
            .send_json()
            .await
    }

    /// Register a GCM device.
    pub async fn create_device(
        &self,
        registration_id: &str,
        name: Option<&str>,
        platform_device_id: Option<&str>,
    ) -> Result<Device> {
        self.create_device_for(Platform::Gcm, registration_id, name, platform_device_id)
            .await
    }

    /// Register a device with the given platform.
    pub async fn create_device_for(
        &self,
        platform: Platform,
        registration_id: &str,
        name: Option<&str>,
        platform_device_id: Option<&str>,
    ) -> Result<Device> {
        let device: Device = self
            .request(Method::POST, Route::devices(platform))
            .json(&DeviceRegistration {
                registration_id,
                name,
                device_id: platform_device_id,
            })
            .send_json()
            .await?;

        Ok(device.with_platform(platform))
    }

    /// Issue a push token addressing `device`.
    pub async fn create_token(&self, device: &Device, name: Option<&str>) -> Result<PushToken> {
        self.request(Method::POST, Route::tokens())
            .json(&TokenRequest::for_device(device, name))
            .send_json()
            .await
    }

    /// Revoke a push token.
    pub async fn delete_token(&self, token: &PushToken) -> Result<()> {
        self.request(Method::DELETE, Route::token(&token.token))
            .send_empty()
            .await
    }

    /// List the push tokens of the current account.
    pub async fn get_tokens(&self) -> Result<TokenList> {
        self.request(Method::GET, Route::tokens()).send_json().await
    }

    /// Send a message to the device addressed by `recipient_token`.
    pub async fn send_message(&self, recipient_token: &str, data: Option<&str>) -> Result<Message> {
        self.request(Method::POST, Route::messages())
            .json(&MessageRequest {
                token: recipient_token,
                data,
            })
            .send_json()
            .await
    }

    /// List GCM devices.
    pub async fn get_gcm_devices(&self) -> Result<DeviceList> {
        self.get_devices(Platform::Gcm).await
    }

    /// List APNS devices.
    pub async fn get_apns_devices(&self) -> Result<DeviceList> {
        self.get_devices(Platform::Apns).await
    }

    /// List the devices of one platform, tagged with it.
    pub async fn get_devices(&self, platform: Platform) -> Result<DeviceList> {
        let page: DeviceList = self
            .request(Method::GET, Route::devices(platform))
            .send_json()
            .await?;

        Ok(page.tagged(platform))
    }

    /// List every device: GCM devices first, then APNS devices.
    ///
    /// The APNS listing is only requested once the GCM listing has
    /// succeeded. If either fails its error is returned and no devices are.
    pub async fn get_all_devices(&self) -> Result<Vec<Device>> {
        let mut devices = Vec::new();

        for platform in Platform::ALL {
            let page = self.get_devices(platform).await.inspect_err(|e| {
                warn!(platform = %platform, error = %e, "Device listing failed");
            })?;
            devices.extend(page);
        }

        Ok(devices)
    }

    /// Update the mutable fields of `device`.
    ///
    /// The request targets `device.id`; the identifier is never part of the
    /// body, so it cannot be changed this way.
    pub async fn update_device(&self, device: &Device) -> Result<Device> {
        let updated: Device = self
            .request(Method::PUT, Route::device(device.platform, &device.id))
            .json(device)
            .send_json()
            .await?;

        Ok(updated.with_platform(device.platform))
    }

    /// Delete the GCM device with the given id.
    pub async fn delete_device(&self, id: &str) -> Result<()> {
        self.delete_device_for(Platform::Gcm, id).await
    }

    /// Delete the device with the given platform and id.
    pub async fn delete_device_for(&self, platform: Platform, id: &str) -> Result<()> {
        self.request(Method::DELETE, Route::device(platform, id))
            .send_empty()
            .await
    }
}

impl std::fmt::Debug for PushSecureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushSecureClient")
            .field("api_host", &self.api_host().as_str())
            .field("armed", &self.is_armed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PushSecureClient::new("https://push.example.com").unwrap();
        assert!(!client.is_armed());
        assert_eq!(client.api_host().as_str(), "https://push.example.com/");
    }

    #[test]
    fn test_client_with_account() {
        let client =
            PushSecureClient::with_account("https://push.example.com", Account::from_token("t1"))
                .unwrap();
        assert_eq!(client.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_arm_is_shared_by_clones() {
        let client = PushSecureClient::new("https://push.example.com").unwrap();
        let clone = client.clone();

        client.arm(&Account::new("alice", "t2"));
        assert_eq!(clone.token().as_deref(), Some("t2"));

        clone.disarm();
        assert!(!client.is_armed());
    }

    #[test]
    fn test_debug_hides_token() {
        let client =
            PushSecureClient::with_account("https://push.example.com", Account::from_token("s3cr3t"))
                .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("armed: true"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(PushSecureClient::new("").is_err());
        assert!(PushSecureClient::new("//no-scheme").is_err());
    }
}
