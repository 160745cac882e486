use crawlscope_types::CrawlNode;
use serde::{Deserialize, Serialize};

/// JSON layout written by the CSV converter.
///
/// Timestamps are kept exactly as they appear in the source file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCrawlJson {
    pub start_timestamp: String,
    pub end_timestamp: String,
    #[serde(rename = "Nodes")]
    pub nodes: Vec<LegacyNodeJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyNodeJson {
    #[serde(rename = "NodeID")]
    pub node_id: String,
    #[serde(rename = "MultiAddrs", default)]
    pub multi_addrs: Vec<String>,
    pub reachable: bool,
    #[serde(default)]
    pub agent_version: String,
}

/// Header-only view used to read the crawl window without materializing nodes
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyHeaderJson {
    pub start_timestamp: String,
    pub end_timestamp: String,
}

impl From<LegacyNodeJson> for CrawlNode {
    fn from(node: LegacyNodeJson) -> Self {
        CrawlNode {
            id: node.node_id,
            multiaddrs: node.multi_addrs,
            reachable: node.reachable,
            agent_version: Some(node.agent_version).filter(|v| !v.is_empty()),
        }
    }
}

impl From<&CrawlNode> for LegacyNodeJson {
    fn from(node: &CrawlNode) -> Self {
        LegacyNodeJson {
            node_id: node.id.clone(),
            multi_addrs: node.multiaddrs.clone(),
            reachable: node.reachable,
            agent_version: node.agent_version.clone().unwrap_or_default(),
        }
    }
}
