use crawlscope_types::{CrawlRecord, CrawlWindow, parse_crawl_timestamp};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::schema::{LegacyCrawlJson, LegacyHeaderJson};
use crate::filename::window_from_path;
use crate::io::read_head;
use crate::traits::{CrawlFormat, CrawlParser, ProbeResult};
use crate::Result;

const PROBE_BYTES: u64 = 512;

/// Reader for the converter's JSON output (`"Nodes"` array)
pub struct LegacyJsonParser;

impl CrawlParser for LegacyJsonParser {
    fn format(&self) -> CrawlFormat {
        CrawlFormat::LegacyJson
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        if !path.is_file() || !path.extension().is_some_and(|e| e == "json") {
            return ProbeResult::NoMatch;
        }
        match read_head(path, PROBE_BYTES) {
            Ok(head) if head.contains("\"Nodes\"") => ProbeResult::match_high(),
            Ok(head) if head.contains("\"NodeID\"") => ProbeResult::match_low(),
            _ => ProbeResult::NoMatch,
        }
    }

    fn parse(&self, path: &Path) -> Result<CrawlRecord> {
        let doc: LegacyCrawlJson = serde_json::from_reader(BufReader::new(File::open(path)?))?;

        let window = match window_from_path(path) {
            Some(window) => window,
            None => CrawlWindow {
                start: parse_crawl_timestamp(&doc.start_timestamp)?,
                end: parse_crawl_timestamp(&doc.end_timestamp)?,
            },
        };

        Ok(CrawlRecord {
            window,
            nodes: doc.nodes.into_iter().map(Into::into).collect(),
        })
    }

    fn read_window(&self, path: &Path) -> Result<Option<CrawlWindow>> {
        let header: LegacyHeaderJson =
            serde_json::from_reader(BufReader::new(File::open(path)?))?;
        Ok(Some(CrawlWindow {
            start: parse_crawl_timestamp(&header.start_timestamp)?,
            end: parse_crawl_timestamp(&header.end_timestamp)?,
        }))
    }
}
