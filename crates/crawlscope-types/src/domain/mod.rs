pub mod crawl;
pub mod peer;
pub mod report;
pub mod snapshot;

pub use crawl::*;
pub use peer::*;
pub use report::*;
pub use snapshot::*;
