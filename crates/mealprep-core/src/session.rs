//! Session and signed-in user types
//!
//! The session is an explicit value owned by the application state and passed
//! to the session guard. There is no global session slot.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key under which the token is persisted by session stores
pub const TOKEN_KEY: &str = "token";

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Blank tokens are never treated as a session
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// The signed-in user, as returned by the account API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl CurrentUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: None,
            is_active: true,
            is_superuser: false,
            created_at: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Full name when set and non-empty, otherwise the email
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Client-side session: a token plus the user it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<SessionToken>,
    user: Option<CurrentUser>,
}

impl Session {
    /// A signed-out session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session. Blank tokens produce a signed-out session.
    pub fn authenticated(token: SessionToken, user: Option<CurrentUser>) -> Self {
        if token.is_blank() {
            return Self::anonymous();
        }
        Self {
            token: Some(token),
            user,
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Install a token obtained from the login flow
    pub fn set(&mut self, token: SessionToken, user: Option<CurrentUser>) {
        *self = Self::authenticated(token, user);
    }

    /// Drop token and user
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}
