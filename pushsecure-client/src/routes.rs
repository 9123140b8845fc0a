//! PushSecure REST endpoints.

use url::Url;

use crate::{Platform, PushSecureError, Result};

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// An endpoint path relative to the API host.
///
/// Each segment is percent-encoded on its own. Segments that URL
/// normalization would collapse (empty, `.` and `..`) are refused when the
/// route is resolved, so caller-supplied ids and tokens cannot escape into
/// other routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: API_PREFIX
                .iter()
                .map(|s| s.to_string())
                .chain(segments.into_iter().map(Into::into))
                .collect(),
        }
    }

    /// Account authentication/creation.
    pub fn accounts() -> Self {
        Self::new(["accounts"])
    }

    /// Device collection for a platform.
    pub fn devices(platform: Platform) -> Self {
        Self::new(["device", platform.as_str()])
    }

    /// A single device.
    pub fn device(platform: Platform, id: &str) -> Self {
        Self::new(["device", platform.as_str(), id])
    }

    /// Token collection.
    pub fn tokens() -> Self {
        Self::new(["tokens"])
    }

    /// A single token.
    pub fn token(token: &str) -> Self {
        Self::new(["tokens", token])
    }

    /// Message dispatch.
    pub fn messages() -> Self {
        Self::new(["messages"])
    }

    /// Resolve against the API host. Routes always end with a slash.
    pub fn url(&self, base: &Url) -> Result<Url> {
        if let Some(segment) = self
            .segments
            .iter()
            .find(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            return Err(PushSecureError::RequestBuild(format!(
                "invalid path segment {:?} in route {}",
                segment, self
            )));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                PushSecureError::Config(format!("API host cannot be used as a base URL: {}", base))
            })?;
            path.pop_if_empty();
            path.extend(&self.segments);
            path.push("");
        }
        Ok(url)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{}/", segment)?;
        }
        Ok(())
    }
}
