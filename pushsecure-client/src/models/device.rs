//! Registered push devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Push delivery channel a device is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Google Cloud Messaging.
    #[default]
    Gcm,
    /// Apple Push Notification Service.
    Apns,
}

impl Platform {
    /// All platforms, in listing order.
    pub const ALL: [Platform; 2] = [Platform::Gcm, Platform::Apns];

    /// Route segment and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Gcm => "gcm",
            Platform::Apns => "apns",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_active() -> bool {
    true
}

/// A device registered to receive pushes.
///
/// `id` and `date_created` are server-managed and never serialized; `platform`
/// is assigned by the client from the endpoint that produced the device.
/// The serialized form is the full replacement sent on update, so an unset
/// `name` or `device_id` goes out as `null` and clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Server-assigned identifier.
    #[serde(skip_serializing, deserialize_with = "super::id::deserialize")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Registration id issued by the platform push service.
    pub registration_id: String,
    /// Platform-specific hardware/device identifier.
    #[serde(default)]
    pub device_id: Option<String>,
    /// Whether the server delivers to this device.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Registration timestamp.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::date::option::deserialize"
    )]
    pub date_created: Option<DateTime<Utc>>,
    /// Delivery channel.
    #[serde(skip)]
    pub platform: Platform,
}

impl Device {
    /// Tag the device with the platform it was listed under.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Check if this is a GCM device.
    pub fn is_gcm(&self) -> bool {
        self.platform == Platform::Gcm
    }

    /// Check if this is an APNS device.
    pub fn is_apns(&self) -> bool {
        self.platform == Platform::Apns
    }
}

/// Body of the device registration request.
#[derive(Debug, Serialize)]
pub(crate) struct DeviceRegistration<'a> {
    pub registration_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server_device() -> serde_json::Value {
        json!({
            "id": 17,
            "name": "Pixel",
            "registration_id": "reg-17",
            "device_id": "0a1b2c",
            "active": true,
            "date_created": "2015-06-23T21:24:15.123456Z"
        })
    }

    #[test]
    fn test_deserialize_server_device() {
        let device: Device = serde_json::from_value(server_device()).unwrap();

        assert_eq!(device.id, "17");
        assert_eq!(device.name.as_deref(), Some("Pixel"));
        assert_eq!(device.registration_id, "reg-17");
        assert_eq!(device.device_id.as_deref(), Some("0a1b2c"));
        assert!(device.active);
        assert!(device.date_created.is_some());
        assert_eq!(device.platform, Platform::Gcm);
    }

    #[test]
    fn test_deserialize_minimal_device() {
        let device: Device =
            serde_json::from_value(json!({"id": "abc", "registration_id": "r"})).unwrap();

        assert_eq!(device.id, "abc");
        assert_eq!(device.name, None);
        assert!(device.active);
        assert_eq!(device.date_created, None);
    }

    #[test]
    fn test_missing_registration_id_is_an_error() {
        let result = serde_json::from_value::<Device>(json!({"id": 1, "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_body_never_carries_identity() {
        let mut device: Device = serde_json::from_value(server_device()).unwrap();
        device = device.with_platform(Platform::Apns);
        device.id = "999".to_string();

        let body = serde_json::to_value(&device).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Pixel",
                "registration_id": "reg-17",
                "device_id": "0a1b2c",
                "active": true
            })
        );
    }

    #[test]
    fn test_cleared_fields_serialize_as_null() {
        let mut device: Device = serde_json::from_value(server_device()).unwrap();
        device.name = None;
        device.device_id = None;

        let body = serde_json::to_value(&device).unwrap();

        assert_eq!(
            body,
            json!({
                "name": null,
                "registration_id": "reg-17",
                "device_id": null,
                "active": true
            })
        );
    }

    #[test]
    fn test_platform_tagging() {
        let device: Device = serde_json::from_value(server_device()).unwrap();
        let device = device.with_platform(Platform::Apns);

        assert!(device.is_apns());
        assert!(!device.is_gcm());
        assert_eq!(Platform::Apns.to_string(), "apns");
        assert_eq!(Platform::ALL, [Platform::Gcm, Platform::Apns]);
    }
}
