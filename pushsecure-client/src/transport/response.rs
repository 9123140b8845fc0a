//! HTTP response wrapper.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::{PushSecureError, Result};

/// A fully read HTTP response.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// Read a reqwest response to the end.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let body = response.bytes().await?;

        trace!(status = %status, bytes = body.len(), "Read response body");

        Ok(Self { status, body })
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the response body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a non-success status into [`PushSecureError::Protocol`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(PushSecureError::Protocol {
                status: self.status.as_u16(),
                body: self.text(),
            })
        }
    }
}
