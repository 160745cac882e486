mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "crawlscope")]
#[command(about = "Reconstruct peer sessions and protocol statistics from network crawls", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to $CRAWLSCOPE_CONFIG, then the user config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
