// Runtime layer - wires crawl discovery, session inference and report files.

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod ops;
pub mod report;

pub use checkpoint::{CheckpointFile, CrawlCursor};
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use report::{ReportFormat, ReportWriter};
