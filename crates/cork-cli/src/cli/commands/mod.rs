pub mod auth;
pub mod config;
pub mod posts;

use anyhow::Result;
use cork_client::{Session, SessionCheck};

/// Session guard for headless commands.
///
/// Interprets the guard's verdict: without a stored credential the command
/// stops before any network call is made.
pub(crate) fn require_session() -> Result<Session> {
    match SessionCheck::from_store()? {
        SessionCheck::Active(session) => Ok(session),
        SessionCheck::RedirectToLogin => {
            anyhow::bail!("Not logged in. Run `cork login` first.")
        }
    }
}
