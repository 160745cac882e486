mod csv_file;
mod json_file;
pub mod schema;

pub use csv_file::{LegacyCsvParser, read_legacy_csv_nodes};
pub use json_file::LegacyJsonParser;
pub use schema::{LegacyCrawlJson, LegacyNodeJson};
