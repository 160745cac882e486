use crawlscope_types::{CrawlRecord, CrawlWindow};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::Result;

/// Reader for one on-disk crawl output format
///
/// Responsibilities:
/// - Recognize files of its format
/// - Parse a file into a format-agnostic `CrawlRecord`
/// - Recover the crawl window from file content when the name lacks it
pub trait CrawlParser: Send + Sync {
    fn format(&self) -> CrawlFormat;

    /// Check if a file belongs to this format
    fn probe(&self, path: &Path) -> ProbeResult;

    /// Parse the entire file
    fn parse(&self, path: &Path) -> Result<CrawlRecord>;

    /// Crawl window stored inside the file, if the format carries one
    fn read_window(&self, _path: &Path) -> Result<Option<CrawlWindow>> {
        Ok(None)
    }
}

/// Known crawl output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrawlFormat {
    /// `node_id;[multiaddrs];reachable;agent_version` lines
    LegacyCsv,
    /// `{"start_timestamp", "end_timestamp", "Nodes": [...]}` as written by the converter
    LegacyJson,
    /// `{"start_timestamp", "end_timestamp", "found_nodes": [...]}` as written by the crawler
    CrawlerJson,
}

impl CrawlFormat {
    pub fn id(&self) -> &'static str {
        match self {
            CrawlFormat::LegacyCsv => "legacy-csv",
            CrawlFormat::LegacyJson => "legacy-json",
            CrawlFormat::CrawlerJson => "crawler-json",
        }
    }
}

impl fmt::Display for CrawlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// --- Helper types ---

/// Probe result with confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Parser can handle this file with given confidence (0.0 - 1.0)
    Confidence(f32),
    /// Parser cannot handle this file
    NoMatch,
}

impl ProbeResult {
    /// Create high confidence match (1.0)
    pub fn match_high() -> Self {
        ProbeResult::Confidence(1.0)
    }

    /// Create low confidence match (0.3)
    pub fn match_low() -> Self {
        ProbeResult::Confidence(0.3)
    }

    /// Check if this is a match (confidence > 0)
    pub fn is_match(&self) -> bool {
        matches!(self, ProbeResult::Confidence(c) if *c > 0.0)
    }

    /// Get confidence score (0.0 if NoMatch)
    pub fn confidence(&self) -> f32 {
        match self {
            ProbeResult::Confidence(c) => *c,
            ProbeResult::NoMatch => 0.0,
        }
    }
}

/// A discovered crawl output file, positioned in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFile {
    pub path: PathBuf,
    pub window: CrawlWindow,
    pub format: CrawlFormat,
}

impl CrawlFile {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// File name without extension; a CSV crawl and its converted JSON share it
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}
