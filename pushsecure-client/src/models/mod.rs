//! Wire models for the PushSecure API.

mod account;
mod device;
mod message;
mod page;
mod token;

pub use account::Account;
pub use device::{Device, Platform};
pub use message::Message;
pub use page::{DeviceList, Page, TokenList};
pub use token::PushToken;

pub(crate) use account::Credentials;
pub(crate) use device::DeviceRegistration;
pub(crate) use message::MessageRequest;
pub(crate) use token::TokenRequest;

/// Identifiers arrive as JSON numbers from the server but are handled as
/// opaque strings on the client.
pub(crate) mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    impl RawId {
        fn into_string(self) -> String {
            match self {
                RawId::Number(n) => n.to_string(),
                RawId::Text(s) => s,
            }
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(RawId::into_string)
    }

    pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_string))
    }
}
