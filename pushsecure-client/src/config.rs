//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::{Account, PushSecureError, Result};

/// Default environment variable prefix.
pub const DEFAULT_ENV_PREFIX: &str = "PUSHSECURE";

/// PushSecure client configuration.
#[derive(Debug, Clone)]
pub struct PushSecureConfig {
    /// Base URL of the PushSecure service.
    pub api_host: String,
    /// Account whose token arms the client at construction.
    pub account: Option<Account>,
    /// Default request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Idle timeout for pooled connections.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// User agent string.
    pub user_agent: String,
}

impl PushSecureConfig {
    /// Create a configuration for the given API host with default settings.
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            account: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 32,
            default_headers: Vec::new(),
            user_agent: format!("pushsecure-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new configuration builder.
    pub fn builder(api_host: impl Into<String>) -> PushSecureConfigBuilder {
        PushSecureConfigBuilder {
            config: Self::new(api_host),
        }
    }

    /// Load configuration from `PUSHSECURE_*` environment variables.
    ///
    /// - `PUSHSECURE_API_HOST` (required)
    /// - `PUSHSECURE_TOKEN` arms the client with a stored session token
    /// - `PUSHSECURE_TIMEOUT_SECS` overrides the request timeout
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Load configuration from environment variables with a custom prefix.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(&format!("{}_{}", prefix, key))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_host = var("API_HOST").ok_or_else(|| {
            PushSecureError::Config(format!("{}_API_HOST is not set", prefix))
        })?;

        let mut builder = Self::builder(api_host);

        if let Some(token) = var("TOKEN") {
            builder = builder.account(Account::from_token(token));
        }

        if let Some(raw) = var("TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                PushSecureError::Config(format!(
                    "{}_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    prefix, raw
                ))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Parse and check the API host.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.api_host.trim())?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(PushSecureError::Config(format!(
                    "API host must use http or https, got {}",
                    other
                )));
            }
        }

        if url.cannot_be_a_base() {
            return Err(PushSecureError::Config(format!(
                "API host cannot be used as a base URL: {}",
                self.api_host
            )));
        }

        Ok(url)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_host.trim().is_empty() {
            return Err(PushSecureError::Config("API host is required".to_string()));
        }
        self.base_url()?;
        Ok(())
    }
}

/// Builder for client configuration.
#[derive(Debug)]
pub struct PushSecureConfigBuilder {
    config: PushSecureConfig,
}

impl PushSecureConfigBuilder {
    /// Arm the client with this account's token.
    pub fn account(mut self, account: Account) -> Self {
        self.config.account = Some(account);
        self
    }

    /// Set the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the connection pool idle timeout.
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set the maximum idle connections per host.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Add a header sent with every request.
    ///
    /// A request's own headers replace a default of the same name.
    /// `Authorization` is reserved for the session token and is refused when
    /// the client is built.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PushSecureConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PushSecureConfig::new("https://push.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.account.is_none());
        assert!(config.user_agent.starts_with("pushsecure-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PushSecureConfig::builder("https://push.example.com")
            .account(Account::from_token("abc"))
            .timeout(Duration::from_secs(5))
            .default_header("X-Client", "tests")
            .build();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.account.as_ref().map(|a| a.token.as_str()), Some("abc"));
        assert_eq!(
            config.default_headers,
            vec![("X-Client".to_string(), "tests".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_bad_hosts() {
        assert!(PushSecureConfig::new("").validate().is_err());
        assert!(PushSecureConfig::new("not a url").validate().is_err());
        assert!(matches!(
            PushSecureConfig::new("ftp://push.example.com").validate(),
            Err(PushSecureError::Config(_))
        ));
        assert!(matches!(
            PushSecureConfig::new("mailto:admin@example.com").validate(),
            Err(PushSecureError::Config(_))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let config = PushSecureConfig::from_lookup(
            "PUSHSECURE",
            lookup(&[
                ("PUSHSECURE_API_HOST", "https://push.example.com/"),
                ("PUSHSECURE_TOKEN", "secret"),
                ("PUSHSECURE_TIMEOUT_SECS", "12"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_host, "https://push.example.com/");
        assert_eq!(config.account.unwrap().token, "secret");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_from_lookup_custom_prefix() {
        let config = PushSecureConfig::from_lookup(
            "CHAT_PUSH",
            lookup(&[("CHAT_PUSH_API_HOST", "http://localhost:8000")]),
        )
        .unwrap();

        assert_eq!(config.api_host, "http://localhost:8000");
        assert!(config.account.is_none());
    }

    #[test]
    fn test_from_lookup_missing_host() {
        let result = PushSecureConfig::from_lookup("PUSHSECURE", lookup(&[]));
        assert!(matches!(result, Err(PushSecureError::Config(_))));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = PushSecureConfig::from_lookup(
            "PUSHSECURE",
            lookup(&[
                ("PUSHSECURE_API_HOST", "https://push.example.com"),
                ("PUSHSECURE_TIMEOUT_SECS", "soon"),
            ]),
        );
        assert!(matches!(result, Err(PushSecureError::Config(_))));
    }

    #[test]
    fn test_from_env_missing_var() {
        let result = PushSecureConfig::from_env_with_prefix("PUSHSECURE_TEST_MISSING_67890");
        assert!(result.is_err());
    }
}
