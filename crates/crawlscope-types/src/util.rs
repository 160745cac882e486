use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::{Error, Result};

/// Timestamp layout used in crawl file names, e.g. `29-11-19--10:30:25`
pub const CRAWL_FILENAME_FORMAT: &str = "%d-%m-%y--%H:%M:%S";

/// Parse a crawl timestamp.
///
/// Accepts the file name layout (`%d-%m-%y--%H:%M:%S`) first, then RFC3339
/// (as written into crawler JSON output). RFC3339 values are normalized to
/// UTC, stripped of their offset and truncated to whole seconds.
pub fn parse_crawl_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, CRAWL_FILENAME_FORMAT) {
        return Ok(ts);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            let ts = dt.naive_utc();
            ts.with_nanosecond(0).unwrap_or(ts)
        })
        .map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

/// Format a timestamp in the crawl file name layout
pub fn format_crawl_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(CRAWL_FILENAME_FORMAT).to_string()
}
