//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory with its own crawl directory and config
//! file, so CLI runs never touch the user's configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::CrawlFixture;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use crawlscope_testing::{CrawlFixture, TestWorld};
///
/// let world = TestWorld::new()
///     .with_csv_crawl(CrawlFixture::at(0).reachable(&["QmA", "QmB"]))
///     .with_csv_crawl(CrawlFixture::at(15).reachable(&["QmA"]));
///
/// let result = world.run(&["sessions"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    crawl_dir: PathBuf,
    output_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with a config pointing into it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let crawl_dir = base_path.join("output_data_crawls");
        let output_dir = base_path.join("plot_data");
        let config_path = base_path.join("config.toml");

        std::fs::create_dir_all(&crawl_dir).expect("Failed to create crawl dir");

        let config = format!(
            "crawl_dir = {:?}\noutput_dir = {:?}\n",
            crawl_dir.display().to_string(),
            output_dir.display().to_string()
        );
        std::fs::write(&config_path, config).expect("Failed to write config");

        Self {
            temp_dir,
            crawl_dir,
            output_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn crawl_dir(&self) -> &Path {
        &self.crawl_dir
    }

    /// Where reports land unless `--output` is given.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn with_csv_crawl(self, crawl: CrawlFixture) -> Self {
        self.write_csv_crawl(&crawl).expect("Failed to write crawl");
        self
    }

    pub fn with_crawler_json(self, crawl: CrawlFixture) -> Self {
        self.write_crawler_json(&crawl)
            .expect("Failed to write crawl");
        self
    }

    /// Write a legacy CSV crawl into the crawl directory.
    pub fn write_csv_crawl(&self, crawl: &CrawlFixture) -> Result<PathBuf> {
        let (name, body) = crawl.legacy_csv();
        self.write_crawl_file(&name, &body)
    }

    /// Write a crawler JSON crawl into the crawl directory.
    pub fn write_crawler_json(&self, crawl: &CrawlFixture) -> Result<PathBuf> {
        let (name, body) = crawl.crawler_json();
        self.write_crawl_file(&name, &body)
    }

    /// Write an arbitrary file into the crawl directory.
    pub fn write_crawl_file(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.crawl_dir.join(name);
        std::fs::write(&path, body)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Points `--config` at the world's config file, runs inside the temp
    /// directory and disables colors.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `crawlscope` binary with `args` and capture its output.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()`, which requires the binary to
    /// be built by the cargo test run that executes the caller.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("crawlscope")
            .map_err(|e| anyhow::anyhow!("Failed to find crawlscope binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
