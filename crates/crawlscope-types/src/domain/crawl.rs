use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Start and end time of one crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrawlWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A single node as reported by a crawl, regardless of the on-disk format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlNode {
    pub id: String,
    pub multiaddrs: Vec<String>,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
}

/// Parsed content of one crawl output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRecord {
    pub window: CrawlWindow,
    pub nodes: Vec<CrawlNode>,
}

impl CrawlRecord {
    pub fn reachable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.reachable).count()
    }
}
