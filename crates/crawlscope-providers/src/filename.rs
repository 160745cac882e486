use crawlscope_types::{CrawlWindow, parse_crawl_timestamp};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Prefix shared by every crawl output file
pub const CRAWL_FILE_PREFIX: &str = "visitedPeers";

// visitedPeers_29-11-19--10:30:25_29-11-19--10:41:29.csv
static CRAWL_FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^visitedPeers_(?P<start>[^_]+)_(?P<end>[^_]+)\.(?P<ext>csv|json)$").unwrap()
});

/// Extract the crawl window encoded in a file name.
///
/// Returns `None` for names outside the `visitedPeers_<start>_<end>.<ext>`
/// pattern or with unparseable timestamps.
pub fn parse_crawl_filename(name: &str) -> Option<CrawlWindow> {
    let (start, end) = split_crawl_filename(name)?;
    Some(CrawlWindow {
        start: parse_crawl_timestamp(start).ok()?,
        end: parse_crawl_timestamp(end).ok()?,
    })
}

/// Raw `(start, end)` timestamp strings of a crawl file name
pub fn split_crawl_filename(name: &str) -> Option<(&str, &str)> {
    let caps = CRAWL_FILENAME_REGEX.captures(name)?;
    Some((caps.name("start")?.as_str(), caps.name("end")?.as_str()))
}

pub fn window_from_path(path: &Path) -> Option<CrawlWindow> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_crawl_filename)
}

/// Whether a file name looks like crawl output at all (before format probing)
pub fn is_crawl_file_name(name: &str) -> bool {
    name.starts_with(CRAWL_FILE_PREFIX)
}
