//! Accounts and credentials.

use serde::{Deserialize, Serialize};

/// An authenticated PushSecure account.
///
/// Returned by [`PushSecureClient::authenticate_account`](crate::PushSecureClient::authenticate_account)
/// and handed back to the client to arm it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account username.
    #[serde(default)]
    pub username: String,
    /// Contact email, if one was registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Session token presented as `Authorization: Token <token>`.
    pub token: String,
}

impl Account {
    /// Create an account from its username and session token.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            token: token.into(),
        }
    }

    /// Create an account from a previously stored session token alone.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self::new(String::new(), token)
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Body of the authentication request.
#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}
