use crawlscope_types::CrawlNode;
use serde::Deserialize;

/// Crawl report as written by the crawler itself.
///
/// Go encodes empty slices as `null`, hence the optional collections.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerOutputJson {
    pub start_timestamp: String,
    pub end_timestamp: String,
    #[serde(default)]
    pub found_nodes: Option<Vec<CrawledNodeJson>>,
}

/// One probed node. `connection_error` and `result` are mutually exclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawledNodeJson {
    pub id: String,
    #[serde(default)]
    pub multiaddrs: Option<Vec<String>>,
    #[serde(default)]
    pub connection_error: Option<String>,
    #[serde(default)]
    pub result: Option<CrawledNodeDataJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrawledNodeDataJson {
    #[serde(default)]
    pub agent_version: String,
    #[serde(default)]
    pub crawl_error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CrawlerHeaderJson {
    pub start_timestamp: String,
    pub end_timestamp: String,
}

impl From<CrawledNodeJson> for CrawlNode {
    fn from(node: CrawledNodeJson) -> Self {
        // A node counts as reachable once a connection was established, even
        // if fetching its neighbours failed afterwards.
        let reachable = node.connection_error.is_none();
        let agent_version = node
            .result
            .map(|r| r.agent_version)
            .filter(|v| !v.is_empty());

        CrawlNode {
            id: node.id,
            multiaddrs: node.multiaddrs.unwrap_or_default(),
            reachable,
            agent_version,
        }
    }
}
