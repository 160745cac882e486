use std::fmt;

/// Result type for crawlscope-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Session reconstruction failed
    Engine(crawlscope_engine::Error),

    /// Crawl reading failed
    Provider(crawlscope_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Report or checkpoint serialization failed
    Json(serde_json::Error),

    /// CSV report writing failed
    Csv(csv::Error),

    /// Checkpoint file is unusable
    Checkpoint(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "Session error: {}", err),
            Error::Provider(err) => write!(f, "Crawl error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Checkpoint(msg) => write!(f, "Checkpoint error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Config(_) | Error::Checkpoint(_) => None,
        }
    }
}

impl From<crawlscope_engine::Error> for Error {
    fn from(err: crawlscope_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<crawlscope_providers::Error> for Error {
    fn from(err: crawlscope_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
