use crate::console::{Console, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use crawlscope_runtime::Config;
use serde_json::json;
use std::path::Path;

pub fn handle(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config::default();
    config.save_to(config_path)?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "config_path": config_path,
            "config": config,
        })),
        OutputFormat::Plain => {
            let console = Console::stdout();
            println!("Wrote default config to {}", console.path(config_path));
            println!("  crawl_dir  = {}", config.crawl_dir.display());
            println!("  output_dir = {}", config.output_dir.display());
            Ok(())
        }
    }
}
