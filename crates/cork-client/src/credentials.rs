//! Credential token storage.
//!
//! Stores the bearer token in `<CORK_HOME>/credentials.json` with restricted
//! permissions (0600). The token is never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Credential file name inside the cork home directory.
const CREDENTIALS_FILE: &str = "credentials.json";

/// Persisted credential for the corkboard service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// The bearer token issued at login.
    pub token: String,
}

impl Credentials {
    /// Returns the path to the credentials file.
    pub fn path() -> PathBuf {
        paths::cork_home().join(CREDENTIALS_FILE)
    }

    /// Loads stored credentials from disk.
    /// Returns `None` if nothing is stored.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path())
    }

    /// Loads stored credentials from a specific path.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

        serde_json::from_str(&contents)
            .map(Some)
            .with_context(|| format!("Failed to parse credentials from {}", path.display()))
    }

    /// Saves the credentials to disk with restricted permissions (0600).
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Saves the credentials to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize credentials")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Deletes the stored credentials.
    /// Returns `false` if nothing was stored.
    pub fn clear() -> Result<bool> {
        Self::clear_at(&Self::path())
    }

    /// Deletes the credentials at a specific path.
    pub fn clear_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        Ok(true)
    }
}
