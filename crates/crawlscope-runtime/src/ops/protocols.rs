use crawlscope_engine::ProtocolCensus;
use crawlscope_providers::{CrawlStream, discover_crawls};
use std::path::Path;

use crate::Result;
use crate::report::{ReportWriter, create_report_file};

#[derive(Debug, Clone)]
pub struct ProtocolsOutcome {
    pub census: ProtocolCensus,
    pub crawls_read: usize,
}

impl ProtocolsOutcome {
    /// Write `nodeid;protocol` rows and return the row count
    pub fn write_report(&self, path: &Path) -> Result<usize> {
        let rows = self.census.rows();
        ReportWriter::for_path(path).write_protocols(create_report_file(path)?, &rows)?;
        Ok(rows.len())
    }
}

/// Union the transports announced by every crawled node, reachable or not
pub fn collect_protocols(crawl_dir: &Path) -> Result<ProtocolsOutcome> {
    let files = discover_crawls(crawl_dir)?;
    let crawls_read = files.len();

    let mut census = ProtocolCensus::new();
    for item in CrawlStream::new(files) {
        let (_, record) = item?;
        for node in &record.nodes {
            census.record(node);
        }
    }

    tracing::info!(
        crawls = crawls_read,
        peers = census.peer_count(),
        "protocol census collected"
    );
    Ok(ProtocolsOutcome {
        census,
        crawls_read,
    })
}
