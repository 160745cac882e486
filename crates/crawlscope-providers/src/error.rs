use std::fmt;
use std::path::PathBuf;

/// Result type for crawlscope-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading crawl output
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// Crawl parsing failed (missing fields, bad timestamps, etc.)
    Parse(String),

    /// No parser recognizes the file
    UnknownFormat(PathBuf),

    /// Walkdir error
    WalkDir(walkdir::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::UnknownFormat(path) => {
                write!(f, "Unrecognized crawl file: {}", path.display())
            }
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Parse(_) | Error::UnknownFormat(_) => None,
        }
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

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}

impl From<crawlscope_types::Error> for Error {
    fn from(err: crawlscope_types::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
