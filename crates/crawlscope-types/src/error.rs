use std::fmt;

/// Result type for crawlscope-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Peer identifier was empty or whitespace only
    EmptyPeerId,

    /// Timestamp did not match any known crawl timestamp format
    InvalidTimestamp(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPeerId => write!(f, "peer id must not be empty"),
            Error::InvalidTimestamp(raw) => write!(f, "invalid crawl timestamp: {}", raw),
        }
    }
}

impl std::error::Error for Error {}
