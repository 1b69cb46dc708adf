//! Saved login session.

use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    /// Token issued by the central service.
    pub authorization: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            authorization: authorization.into(),
            logged_in_at: Utc::now(),
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(SESSION_FILE)
    }

    /// Saves the session to `dir`.
    pub async fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).await?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(Self::path_in(dir), json).await?;
        Ok(())
    }

    /// Loads the session saved in `dir`. A missing or unreadable file means
    /// nobody is logged in.
    pub async fn load(dir: &Path) -> Option<Self> {
        let path = Self::path_in(dir);
        match fs::try_exists(&path).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                log::warn!("Cannot check session file {}: {e}", path.display());
                return None;
            }
        }

        match fs::read_to_string(&path).await {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("Ignoring corrupt session file {}: {e}", path.display());
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read session file {}: {e}", path.display());
                None
            }
        }
    }

    /// Deletes the saved session, if any.
    pub async fn delete(dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        if fs::try_exists(&path).await? {
            fs::remove_file(path).await?;
        }
        Ok(())
    }
}
