use crate::types::OutputFormat;
use anyhow::Result;
use crawlscope_runtime::{Config, resolve_config_path};
use std::path::{Path, PathBuf};

/// Resolved config plus global flags, shared by all handlers
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(explicit_config: Option<&str>, format: OutputFormat) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        let config = Config::load_from(&config_path)?;
        tracing::debug!(path = %config_path.display(), "config loaded");

        Ok(Self {
            config_path,
            config,
            format,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// `--crawl-dir` if given, the configured directory otherwise
    pub fn crawl_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.config.crawl_dir.clone())
    }

    pub fn include_unreachable(&self, flag: Option<bool>) -> bool {
        flag.unwrap_or(self.config.include_unreachable)
    }
}
