use crawlscope_types::{CrawlNode, CrawlRecord};
use std::path::Path;

use crate::filename::window_from_path;
use crate::io::parse_flag;
use crate::traits::{CrawlFormat, CrawlParser, ProbeResult};
use crate::{Error, Result};

/// Reader for the crawler's original `;`-separated output.
///
/// Line layout: `node_id;[ma1 ma2 ...];reachable;agent_version`, no header.
/// The crawl window is only available from the file name.
pub struct LegacyCsvParser;

impl CrawlParser for LegacyCsvParser {
    fn format(&self) -> CrawlFormat {
        CrawlFormat::LegacyCsv
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        if !path.is_file() {
            return ProbeResult::NoMatch;
        }
        let is_csv = path.extension().is_some_and(|e| e == "csv");
        if is_csv && window_from_path(path).is_some() {
            ProbeResult::match_high()
        } else {
            ProbeResult::NoMatch
        }
    }

    fn parse(&self, path: &Path) -> Result<CrawlRecord> {
        let window = window_from_path(path).ok_or_else(|| {
            Error::Parse(format!(
                "no crawl timestamps in file name: {}",
                path.display()
            ))
        })?;
        let nodes = read_legacy_csv_nodes(path)?;
        Ok(CrawlRecord { window, nodes })
    }
}

/// Read all node lines of a legacy CSV crawl.
///
/// Lines with fewer than three fields or an unreadable reachability flag are
/// skipped with a warning.
pub fn read_legacy_csv_nodes(path: &Path) -> Result<Vec<CrawlNode>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)?;

    let mut nodes = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        match parse_line(&record) {
            Some(node) => nodes.push(node),
            None => tracing::warn!(
                file = %path.display(),
                line = line + 1,
                "skipping malformed crawl line"
            ),
        }
    }
    Ok(nodes)
}

fn parse_line(record: &csv::StringRecord) -> Option<CrawlNode> {
    let id = record.get(0)?.trim().to_string();
    let multiaddrs = split_multiaddrs(record.get(1)?);
    let reachable = parse_flag(record.get(2)?)?;
    let agent_version = record
        .get(3)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(CrawlNode {
        id,
        multiaddrs,
        reachable,
        agent_version,
    })
}

/// `[/ip4/1.2.3.4/tcp/4001 /ip6/::1/tcp/4001]` → two addresses
fn split_multiaddrs(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
