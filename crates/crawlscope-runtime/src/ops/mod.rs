pub mod convert;
pub mod crawls;
pub mod protocols;
pub mod sessions;

pub use convert::convert_crawls;
pub use crawls::list_crawls;
pub use protocols::{ProtocolsOutcome, collect_protocols};
pub use sessions::{SessionService, SessionsOutcome, SessionsRequest};
