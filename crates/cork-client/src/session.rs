//! Session handling for authorized calls.
//!
//! The token is read once from the credential store and carried as an
//! explicit value: every authorized request receives the session instead of
//! reading shared state. Issued at login, cleared at logout.

use anyhow::Result;

use crate::credentials::Credentials;

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    /// Issues a session from a freshly obtained token.
    pub fn issue(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The bearer token attached to authorized requests.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Outcome of the session guard.
///
/// Callers interpret this as a navigation command: `RedirectToLogin` means
/// the login surface must be shown and no network call may be made.
#[derive(Debug, Clone)]
pub enum SessionCheck {
    /// A stored credential exists; authorized views may load.
    Active(Session),
    /// No stored credential; route to login.
    RedirectToLogin,
}

impl SessionCheck {
    /// Checks the credential store. Touches only the local filesystem.
    pub fn from_store() -> Result<Self> {
        Ok(Self::from_credentials(Credentials::load()?))
    }

    /// Maps stored credentials to a guard outcome.
    pub fn from_credentials(creds: Option<Credentials>) -> Self {
        match creds {
            Some(creds) => SessionCheck::Active(Session::issue(creds.token)),
            None => SessionCheck::RedirectToLogin,
        }
    }
}
