use crawlscope_providers::{CrawlFile, discover_crawls};
use std::path::Path;

use crate::Result;

/// Crawl files in the order sessions are folded
pub fn list_crawls(crawl_dir: &Path) -> Result<Vec<CrawlFile>> {
    Ok(discover_crawls(crawl_dir)?)
}
