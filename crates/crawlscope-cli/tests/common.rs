//! Common crawl setups shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use crawlscope_testing::{CrawlFixture, TestWorld};

/// 10:00 {A,B}, 10:15 {A,C}, 10:30 {B,C}, 10:45 {A,B,C}, 11:00 {D}
pub fn flapping_world() -> TestWorld {
    TestWorld::new()
        .with_csv_crawl(CrawlFixture::at(0).reachable(&["QmA", "QmB"]))
        .with_csv_crawl(CrawlFixture::at(15).reachable(&["QmA", "QmC"]))
        .with_csv_crawl(CrawlFixture::at(30).reachable(&["QmB", "QmC"]))
        .with_csv_crawl(CrawlFixture::at(45).reachable(&["QmA", "QmB", "QmC"]))
        .with_csv_crawl(CrawlFixture::at(60).reachable(&["QmD"]))
}

/// Same shape as the legacy crawls, written by the newer crawler
pub fn crawler_world() -> TestWorld {
    TestWorld::new()
        .with_crawler_json(CrawlFixture::at(0).reachable(&["QmA", "QmB"]))
        .with_crawler_json(
            CrawlFixture::at(15)
                .reachable(&["QmA"])
                .unreachable(&["QmB"]),
        )
        .with_crawler_json(CrawlFixture::at(30).reachable(&["QmA", "QmB"]))
}
