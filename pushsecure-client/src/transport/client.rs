//! HTTP transport bound to one API host.

use std::sync::Arc;

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use tracing::debug;
use url::Url;

use crate::routes::Route;
use crate::{PushSecureConfig, PushSecureError, RequestBuilder, Response, Result};

/// HTTP transport for the PushSecure API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    base_url: Arc<Url>,
    default_headers: Arc<HeaderMap>,
}

impl HttpTransport {
    /// Create a transport from the given configuration.
    pub fn new(config: &PushSecureConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| PushSecureError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| PushSecureError::Config(format!("Invalid header name {:?}: {}", name, e)))?;
            // The session token is the only source of Authorization.
            if name == header::AUTHORIZATION {
                return Err(PushSecureError::Config(
                    "Authorization cannot be a default header; arm the client with a token"
                        .to_string(),
                ));
            }
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| PushSecureError::Config(format!("Invalid value for header {}: {}", name, e)))?;
            default_headers.append(name, value);
        }

        Ok(Self {
            inner,
            base_url: Arc::new(base_url),
            default_headers: Arc::new(default_headers),
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    pub(crate) fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Create a GET request builder.
    pub fn get(&self, route: Route) -> RequestBuilder<'_> {
        self.request(Method::GET, route)
    }

    /// Create a POST request builder.
    pub fn post(&self, route: Route) -> RequestBuilder<'_> {
        self.request(Method::POST, route)
    }

    /// Create a PUT request builder.
    pub fn put(&self, route: Route) -> RequestBuilder<'_> {
        self.request(Method::PUT, route)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, route: Route) -> RequestBuilder<'_> {
        self.request(Method::DELETE, route)
    }

    /// Create a request builder with a custom method.
    pub fn request(&self, method: Method, route: Route) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, route)
    }

    /// Execute a request exactly once.
    pub(crate) async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.inner.execute(request).await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            "Received PushSecure response"
        );

        Response::from_reqwest(response).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_transport_creation() {
        let config = PushSecureConfig::builder("https://push.example.com/push")
            .timeout(Duration::from_secs(60))
            .default_header("X-Client", "tests")
            .build();

        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url().as_str(), "https://push.example.com/push");
        assert_eq!(
            transport.default_headers().get("x-client").unwrap(),
            "tests"
        );
    }

    #[test]
    fn test_invalid_default_header() {
        let config = PushSecureConfig::builder("https://push.example.com")
            .default_header("Bad Header", "x")
            .build();

        assert!(matches!(
            HttpTransport::new(&config),
            Err(PushSecureError::Config(_))
        ));
    }

    #[test]
    fn test_default_authorization_rejected() {
        let config = PushSecureConfig::builder("https://push.example.com")
            .default_header("authorization", "Token stale")
            .build();

        assert!(matches!(
            HttpTransport::new(&config),
            Err(PushSecureError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_host() {
        let config = PushSecureConfig::new("push.example.com");
        assert!(HttpTransport::new(&config).is_err());
    }
}
