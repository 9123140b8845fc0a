//! Push tokens addressing a single device.

use serde::{Deserialize, Serialize};

use super::{Device, Platform};

/// A credential a sender uses to address pushes to one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushToken {
    /// Opaque token value.
    pub token: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GCM device this token addresses.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::id::deserialize_option"
    )]
    pub gcm_device: Option<String>,
    /// APNS device this token addresses.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::id::deserialize_option"
    )]
    pub apns_device: Option<String>,
}

impl PushToken {
    /// The device this token addresses, with its platform.
    pub fn device(&self) -> Option<(Platform, &str)> {
        match (&self.gcm_device, &self.apns_device) {
            (Some(id), _) => Some((Platform::Gcm, id.as_str())),
            (None, Some(id)) => Some((Platform::Apns, id.as_str())),
            (None, None) => None,
        }
    }
}

/// Body of the token creation request.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_device: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_device: Option<&'a str>,
}

impl<'a> TokenRequest<'a> {
    pub(crate) fn for_device(device: &'a Device, name: Option<&'a str>) -> Self {
        let id = Some(device.id.as_str());
        match device.platform {
            Platform::Gcm => Self {
                name,
                gcm_device: id,
                apns_device: None,
            },
            Platform::Apns => Self {
                name,
                gcm_device: None,
                apns_device: id,
            },
        }
    }
}
