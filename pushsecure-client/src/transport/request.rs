//! Request builder.

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::routes::Route;
use crate::{HttpTransport, PushSecureError, Response, Result};

/// Authorization scheme expected by the PushSecure server.
pub const TOKEN_SCHEME: &str = "Token";

/// PushSecure request builder.
///
/// Problems found while building (an unserializable body, a header that is
/// not valid HTTP) are held back and returned from [`send`](Self::send).
pub struct RequestBuilder<'a> {
    transport: &'a HttpTransport,
    method: Method,
    route: Route,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    error: Option<PushSecureError>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(transport: &'a HttpTransport, method: Method, route: Route) -> Self {
        Self {
            transport,
            method,
            route,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            error: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        match (
            HeaderName::try_from(name),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => self.fail(PushSecureError::RequestBuild(format!(
                "invalid header {:?}",
                name
            ))),
        }
        self
    }

    /// Authorize with a session token, if there is one.
    ///
    /// With `None` no Authorization header is sent at all.
    pub fn token_auth(mut self, token: Option<&str>) -> Self {
        let Some(token) = token else {
            self.headers.remove(header::AUTHORIZATION);
            return self;
        };

        match HeaderValue::try_from(format!("{} {}", TOKEN_SCHEME, token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.headers.insert(header::AUTHORIZATION, value);
            }
            Err(_) => self.fail(PushSecureError::RequestBuild(
                "session token is not a valid header value".to_string(),
            )),
        }
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.body = Some(bytes);
            }
            Err(e) => self.fail(PushSecureError::Serialization(e)),
        }
        self
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn fail(&mut self, error: PushSecureError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Headers as sent: the JSON `Accept` default, then the transport's
    /// default headers, then this request's own. A later layer replaces every
    /// value of a name set by an earlier one.
    fn merged_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        overlay(&mut headers, self.transport.default_headers());
        overlay(&mut headers, &self.headers);
        headers
    }

    /// Send the request and return the raw response, whatever its status.
    pub async fn send(mut self) -> Result<Response> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        let url = self.route.url(self.transport.base_url())?;
        let headers = self.merged_headers();

        debug!(
            method = %self.method,
            url = %url,
            authorized = self.headers.contains_key(header::AUTHORIZATION),
            "Sending PushSecure request"
        );

        let mut request = self
            .transport
            .inner()
            .request(self.method, url)
            .headers(headers);

        if let Some(body) = self.body {
            request = request.body(body);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        self.transport.execute(request.build()?).await
    }

    /// Send the request, require a success status and parse the JSON body.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.error_for_status()?.json()
    }

    /// Send the request and require a success status, ignoring the body.
    pub async fn send_empty(self) -> Result<()> {
        self.send().await?.error_for_status()?;
        Ok(())
    }
}

fn overlay(target: &mut HeaderMap, layer: &HeaderMap) {
    for name in layer.keys() {
        target.remove(name);
    }
    for (name, value) in layer {
        target.append(name, value.clone());
    }
}
