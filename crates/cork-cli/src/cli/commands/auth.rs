//! Authentication commands.

use std::io::BufRead;

use anyhow::{Context, Result};
use cork_client::{ApiClient, Config, Credentials};

use super::require_session;

/// Logs in and stores the issued token.
pub async fn login(config: &Config, email: &str, password: Option<&str>) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => read_password_from_stdin()?,
    };

    let api = ApiClient::new(config.resolve_base_url()?);
    match api.login(email, &password).await {
        Ok(token) => {
            Credentials { token }.save().context("save credentials")?;
            println!("Logged in as {email}.");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            anyhow::bail!("{}", err.user_message("Login failed"))
        }
    }
}

/// Creates an account. The confirmation check runs locally; on mismatch no
/// request is sent.
pub async fn register(
    config: &Config,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<()> {
    if password != confirm {
        anyhow::bail!("Passwords don't match");
    }

    let api = ApiClient::new(config.resolve_base_url()?);
    match api.register(name, email, password).await {
        Ok(()) => {
            println!("Registered {email}. Log in with `cork login`.");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "registration failed");
            anyhow::bail!("{}", err.user_message("Registration failed"))
        }
    }
}

/// Deletes the stored token.
pub fn logout() -> Result<()> {
    if Credentials::clear().context("clear credentials")? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Prints the signed-in user's profile.
pub async fn whoami(config: &Config) -> Result<()> {
    let session = require_session()?;
    let api = ApiClient::new(config.resolve_base_url()?);
    let user = api.fetch_user(&session).await?;
    println!("{} <{}>", user.name, user.email);
    Ok(())
}

fn read_password_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    Ok(trimmed.to_string())
}
