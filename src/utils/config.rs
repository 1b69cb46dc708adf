//! Dashboard configuration.
//!
//! Read from `config.json` in the dashboard directory. Every field has a
//! default, so a missing or partial file still yields a usable config.

use crate::utils::dirs::dashboard_dir;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window title.
    pub title: String,
    /// Id of the page element the view tree is mounted into.
    pub root_element: String,
    /// Base URL of the central management service.
    pub central_url: String,
    /// Overrides where the session file is kept.
    pub data_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Volttron Central".to_string(),
            root_element: "app".to_string(),
            central_url: "http://127.0.0.1:8080".to_string(),
            data_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Loads `config.json` from `dir`, falling back to defaults if it does not exist.
    pub async fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !fs::try_exists(&path).await? {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads the config from the default dashboard directory.
    pub async fn load() -> Result<Self> {
        Self::load_from(&dashboard_dir()).await
    }

    /// Directory where the session file lives.
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dashboard_dir)
    }
}
