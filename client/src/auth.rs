//! Cosmetic login/registration for the site session
//!
//! This is a client-side check only; there is no account storage and no
//! trust boundary. The hard-coded admin pair merely unlocks the content
//! editor in the same process.

use log::info;
use thiserror::Error;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("all fields are required")]
    MissingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub is_admin: bool,
}

/// Current login state of the site.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in. Any non-empty pair is accepted; the fixed admin pair yields
    /// an admin session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&User, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let is_admin = username == ADMIN_USERNAME && password == ADMIN_PASSWORD;
        info!("user '{}' logged in (admin: {})", username, is_admin);

        Ok(self.user.insert(User {
            username: username.to_string(),
            is_admin,
        }))
    }

    /// Creates an account and signs in as a regular user.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<&User, AuthError> {
        if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        info!("user '{}' registered", username);
        Ok(self.user.insert(User {
            username: username.to_string(),
            is_admin: false,
        }))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("user '{}' logged out", user.username);
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}
