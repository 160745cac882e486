use crawlscope_providers::write_legacy_json;
use std::path::{Path, PathBuf};

use crate::Result;

/// Convert every legacy CSV crawl in `crawl_dir` to JSON, returning the written files
pub fn convert_crawls(crawl_dir: &Path) -> Result<Vec<PathBuf>> {
    if !crawl_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("crawl directory not found: {}", crawl_dir.display()),
        )
        .into());
    }
    Ok(write_legacy_json(crawl_dir)?)
}
