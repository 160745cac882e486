mod parser;
pub mod schema;

pub use parser::CrawlerJsonParser;
pub use schema::{CrawledNodeJson, CrawlerOutputJson};
