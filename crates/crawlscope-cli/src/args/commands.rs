use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },

    #[command(about = "Reconstruct per-peer online sessions and write their durations")]
    Sessions {
        #[command(flatten)]
        source: CrawlDirArgs,

        #[arg(long, help = "Report file (.json for JSON, CSV otherwise)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Count found-but-unreachable nodes as online")]
        include_unreachable: bool,

        #[arg(
            long,
            conflicts_with = "include_unreachable",
            help = "Count only reachable nodes as online, even if the config says otherwise"
        )]
        reachable_only: bool,

        #[arg(long, help = "Write start and end of every session, not only its duration")]
        intervals: bool,

        #[arg(long, help = "Resume from and update this checkpoint file")]
        checkpoint: Option<PathBuf>,
    },

    #[command(about = "Collect the transport protocols announced by each peer")]
    Protocols {
        #[command(flatten)]
        source: CrawlDirArgs,

        #[arg(long, help = "Report file (.json for JSON, CSV otherwise)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Convert legacy CSV crawls to JSON")]
    Convert {
        #[command(flatten)]
        source: CrawlDirArgs,
    },

    #[command(about = "List crawl files in the order they are folded")]
    Crawls {
        #[command(flatten)]
        source: CrawlDirArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct CrawlDirArgs {
    #[arg(long, help = "Directory holding visitedPeers_* crawl files")]
    pub crawl_dir: Option<PathBuf>,
}
