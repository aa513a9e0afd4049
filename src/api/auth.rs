//! Credentials, password hashing and the authenticated session.

use sha1::{Digest, Sha1};

use crate::api::types::User;
use crate::error::{Error, Result};

/// Hash a plaintext password the way the login endpoint expects it.
///
/// The service never receives the plaintext: it is replaced by the lowercase
/// hex SHA-1 digest before every login request.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Email/password pair supplied by the user.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated identity for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub subscription: String,
    pub country: String,
}

impl Session {
    /// Build a session from the user returned by login.
    pub fn from_user(user: &User) -> Result<Self> {
        let subscription = user
            .contexts
            .all
            .first()
            .map(|ctx| ctx.subject.subscription.clone())
            .ok_or_else(|| Error::Authentication("Login response has no user context".into()))?;

        if user.access_token.is_empty() {
            return Err(Error::Authentication(
                "Login response has no access token".into(),
            ));
        }

        Ok(Self {
            access_token: user.access_token.clone(),
            subscription,
            country: user.country.clone(),
        })
    }
}
