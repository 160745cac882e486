//! Crawl file fixtures.
//!
//! A `CrawlFixture` describes one crawl (window plus nodes) and renders it in
//! either on-disk layout, with the `visitedPeers_<start>_<end>` file name the
//! discovery step expects.

use chrono::{Duration, NaiveDate, NaiveDateTime, SecondsFormat};
use crawlscope_types::format_crawl_timestamp;
use serde_json::json;

/// Default multiaddrs given to fixture nodes
pub const DEFAULT_ADDRS: [&str; 2] = ["/ip4/10.0.0.1/tcp/4001", "/ip6/::1/udp/4001/quic"];

#[derive(Debug, Clone)]
pub struct FixtureNode {
    pub id: String,
    pub multiaddrs: Vec<String>,
    pub reachable: bool,
}

#[derive(Debug, Clone)]
pub struct CrawlFixture {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub nodes: Vec<FixtureNode>,
}

/// 2019-11-29 10:00:00 plus `minutes`
pub fn crawl_time(minutes: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 11, 29)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid base time")
        + Duration::minutes(minutes)
}

impl CrawlFixture {
    /// Crawl starting `minutes` after the base time and lasting five minutes
    pub fn at(minutes: i64) -> Self {
        let start = crawl_time(minutes);
        Self {
            start,
            end: start + Duration::minutes(5),
            nodes: Vec::new(),
        }
    }

    pub fn reachable(self, ids: &[&str]) -> Self {
        ids.iter().fold(self, |crawl, id| {
            crawl.node(id, &DEFAULT_ADDRS, true)
        })
    }

    pub fn unreachable(self, ids: &[&str]) -> Self {
        ids.iter().fold(self, |crawl, id| {
            crawl.node(id, &DEFAULT_ADDRS, false)
        })
    }

    pub fn node(mut self, id: &str, multiaddrs: &[&str], reachable: bool) -> Self {
        self.nodes.push(FixtureNode {
            id: id.to_string(),
            multiaddrs: multiaddrs.iter().map(|a| a.to_string()).collect(),
            reachable,
        });
        self
    }

    pub fn file_stem(&self) -> String {
        format!(
            "visitedPeers_{}_{}",
            format_crawl_timestamp(&self.start),
            format_crawl_timestamp(&self.end)
        )
    }

    /// `(file name, body)` in the `id;[addrs];reachable;agent` layout
    pub fn legacy_csv(&self) -> (String, String) {
        let body = self
            .nodes
            .iter()
            .map(|n| {
                format!(
                    "{};[{}];{};go-ipfs/0.4.22/\n",
                    n.id,
                    n.multiaddrs.join(" "),
                    n.reachable
                )
            })
            .collect();
        (format!("{}.csv", self.file_stem()), body)
    }

    /// `(file name, body)` in the crawler's `found_nodes` layout
    pub fn crawler_json(&self) -> (String, String) {
        let start = self.start.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = self.end.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true);
        let nodes: Vec<_> = self
            .nodes
            .iter()
            .map(|n| {
                json!({
                    "id": n.id,
                    "multiaddrs": n.multiaddrs,
                    "connection_error": if n.reachable { None } else { Some("dial backoff") },
                    "result": null,
                })
            })
            .collect();
        let body = json!({
            "start_timestamp": start,
            "end_timestamp": end,
            "found_nodes": nodes,
        });
        (format!("{}.json", self.file_stem()), body.to_string())
    }
}
