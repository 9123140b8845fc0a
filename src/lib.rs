// PushSecure - an async Rust SDK for the PushSecure push notification service
//
// This library re-exports the typed client: account authentication, device
// registration, push token issuance and message dispatch.

pub use pushsecure_client::*;

// Prelude for common imports
pub mod prelude {
    pub use pushsecure_client::prelude::*;
}
