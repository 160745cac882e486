use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CRAWLSCOPE_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CRAWLSCOPE_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.crawlscope/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("crawlscope").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".crawlscope").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `visitedPeers_*` crawl files
    pub crawl_dir: PathBuf,
    /// Directory reports are written into when no explicit output is given
    pub output_dir: PathBuf,
    /// Count nodes that were found but not reachable as online
    pub include_unreachable: bool,
    pub session_report: String,
    pub protocol_report: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawl_dir: PathBuf::from("output_data_crawls"),
            output_dir: PathBuf::from("plot_data"),
            include_unreachable: false,
            session_report: "session_lengths.csv".to_string(),
            protocol_report: "protocol_stats.csv".to_string(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn session_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.session_report)
    }

    pub fn protocol_report_path(&self) -> PathBuf {
        self.output_dir.join(&self.protocol_report)
    }
}
