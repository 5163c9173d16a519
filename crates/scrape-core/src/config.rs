use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::http::CurlOptions;

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    600
}

fn default_max_redirections() -> u32 {
    10
}

/// Global configuration loaded from `~/.config/scrape/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Seconds allowed for the TCP/TLS connect phase of each request.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request (page or media file).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Redirects curl follows before giving up.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional User-Agent header; curl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            max_redirections: default_max_redirections(),
            user_agent: None,
        }
    }
}

impl ScrapeConfig {
    /// Transfer options handed to every GET.
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout_secs: self.connect_timeout_secs,
            timeout_secs: self.timeout_secs,
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scrape")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<ScrapeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ScrapeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
