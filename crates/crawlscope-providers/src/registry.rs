use crawlscope_types::CrawlRecord;
use std::path::Path;

use crate::Result;
use crate::crawler::CrawlerJsonParser;
use crate::legacy::{LegacyCsvParser, LegacyJsonParser};
use crate::traits::{CrawlFile, CrawlFormat, CrawlParser};

/// Create all crawl parsers
pub fn all_parsers() -> Vec<Box<dyn CrawlParser>> {
    vec![
        Box::new(LegacyCsvParser),
        Box::new(LegacyJsonParser),
        Box::new(CrawlerJsonParser),
    ]
}

pub fn parser_for(format: CrawlFormat) -> Box<dyn CrawlParser> {
    match format {
        CrawlFormat::LegacyCsv => Box::new(LegacyCsvParser),
        CrawlFormat::LegacyJson => Box::new(LegacyJsonParser),
        CrawlFormat::CrawlerJson => Box::new(CrawlerJsonParser),
    }
}

/// Pick the parser with the highest probe confidence for `path`
pub fn detect_parser(path: &Path) -> Option<Box<dyn CrawlParser>> {
    all_parsers()
        .into_iter()
        .map(|p| (p.probe(path), p))
        .filter(|(probe, _)| probe.is_match())
        .max_by(|(a, _), (b, _)| a.confidence().total_cmp(&b.confidence()))
        .map(|(_, p)| p)
}

pub fn parse_crawl_file(file: &CrawlFile) -> Result<CrawlRecord> {
    parser_for(file.format).parse(&file.path)
}
