//! Paginated list envelopes.

use serde::{Deserialize, Serialize};

use super::{Device, Platform, PushToken};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A page of devices.
pub type DeviceList = Page<Device>;

/// A page of push tokens.
pub type TokenList = Page<PushToken>;

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Check if the server has more pages.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Iterate over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Consume the page, keeping only its items.
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl Page<Device> {
    /// Tag every device on this page with `platform`.
    pub(crate) fn tagged(mut self, platform: Platform) -> Self {
        for device in &mut self.results {
            device.platform = platform;
        }
        self
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
