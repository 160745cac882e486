// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Crawl formats
pub mod crawler;
pub mod legacy;

// File naming and discovery
pub mod discovery;
pub mod filename;
mod io;

// Parser registry
pub mod registry;

// Snapshot production
pub mod snapshot;

// CSV → JSON conversion
pub mod convert;

// Traits
pub use traits::{CrawlFile, CrawlFormat, CrawlParser, ProbeResult};

// Registry
pub use registry::{all_parsers, detect_parser, parse_crawl_file, parser_for};

// Discovery
pub use discovery::discover_crawls;
pub use filename::{parse_crawl_filename, split_crawl_filename};

// Snapshots
pub use snapshot::{CrawlStream, SnapshotFilter, SnapshotStream};

// Conversion
pub use convert::{convert_legacy_csv, write_legacy_json};

// Error types
pub use error::{Error, Result};
