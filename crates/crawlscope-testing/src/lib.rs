//! Testing infrastructure for crawlscope integration tests.
//!
//! - `TestWorld`: isolated crawl directory and config, plus CLI execution
//! - `fixtures`: crawl files in the legacy CSV and crawler JSON layouts
//! - `assertions`: checks over written reports and JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::CrawlFixture;
pub use world::{CliResult, TestWorld};
