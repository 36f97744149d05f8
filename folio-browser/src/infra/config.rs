use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domains::catalog::{FetchSettings, StaleResponsePolicy};
use crate::infra::constants::{paging, provider, scroll};

pub const SERVER_URL_ENV: &str = "FOLIO_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub cold_page_size: usize,
    pub append_page_size: usize,
    pub settle_delay_ms: u64,
    pub near_bottom_threshold: f32,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: provider::DEFAULT_SERVER_URL.to_string(),
            cold_page_size: paging::COLD_PAGE_SIZE,
            append_page_size: paging::APPEND_PAGE_SIZE,
            settle_delay_ms: paging::SETTLE_DELAY_MS,
            near_bottom_threshold: scroll::NEAR_BOTTOM_THRESHOLD,
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl Config {
    /// `config.json` under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("folio-browser").join("config.json"))
    }

    pub fn load() -> Self {
        Self::load_with(
            Self::default_path().as_deref(),
            std::env::var(SERVER_URL_ENV).ok(),
        )
    }

    /// Defaults, then the config file at `path` if it parses, then the
    /// server URL override
    pub fn load_with(
        path: Option<&Path>,
        server_url_override: Option<String>,
    ) -> Self {
        let mut config = path
            .filter(|path| path.exists())
            .and_then(Self::read_file)
            .unwrap_or_default();

        if let Some(server_url) = server_url_override
            && !server_url.trim().is_empty()
        {
            config.server_url = server_url;
        }

        config
    }

    fn read_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read {}: {}",
                    path.display(),
                    err
                );
                return None;
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!(
                    "[Config] Ignoring malformed {}: {}",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    /// Write to [`Config::default_path`]. Returns the path written, or
    /// `None` when the platform has no config directory.
    pub fn save(&self) -> Result<Option<PathBuf>, std::io::Error> {
        let Some(path) = Self::default_path() else {
            log::warn!("[Config] No config directory, not saving");
            return Ok(None);
        };
        self.save_to(&path)?;
        Ok(Some(path))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }
}

impl From<&Config> for FetchSettings {
    fn from(config: &Config) -> Self {
        Self {
            cold_page_size: config.cold_page_size,
            append_page_size: config.append_page_size,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            stale_responses: config.stale_responses,
        }
    }
}
