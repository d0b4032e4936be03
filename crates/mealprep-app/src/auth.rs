//! Login collaborator
//!
//! The dashboard does not talk to the account API directly; it goes through
//! an [`AuthProvider`]. [`OfflineAuthProvider`] accepts any well-formed
//! credentials and issues a random token.

use chrono::Utc;
use rand::Rng;

use mealprep_core::prelude::*;
use mealprep_core::{CurrentUser, SessionToken};

use crate::login::Credentials;

/// Exchanges credentials for a session token
#[trait_variant::make(AuthProvider: Send)]
pub trait LocalAuthProvider {
    /// Sign in, returning the token and the signed-in user
    async fn login(&self, credentials: Credentials) -> Result<(SessionToken, CurrentUser)>;
}

/// Provider that signs in without a server
#[derive(Debug, Clone, Default)]
pub struct OfflineAuthProvider {
    default_full_name: Option<String>,
    /// Emails that are refused, for exercising the failure path
    rejected: Vec<String>,
}

impl OfflineAuthProvider {
    pub fn new(default_full_name: Option<String>) -> Self {
        Self {
            default_full_name,
            rejected: Vec::new(),
        }
    }

    /// Refuse logins for this email
    pub fn reject(mut self, email: impl Into<String>) -> Self {
        self.rejected.push(email.into());
        self
    }
}

/// 32 random bytes as lowercase hex
pub fn generate_token() -> SessionToken {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    SessionToken::new(hex)
}

impl AuthProvider for OfflineAuthProvider {
    async fn login(&self, credentials: Credentials) -> Result<(SessionToken, CurrentUser)> {
        if self
            .rejected
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&credentials.email))
        {
            debug!("Rejected login for {}", credentials.email);
            return Err(Error::InvalidCredentials);
        }

        let mut user = CurrentUser::new(credentials.email);
        user.full_name = self.default_full_name.clone();
        user.created_at = Some(Utc::now());

        info!("Signed in {}", user.email);
        Ok((generate_token(), user))
    }
}
