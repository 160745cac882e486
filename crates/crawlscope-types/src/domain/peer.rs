use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// libp2p peer identifier as printed by the crawler (e.g. `QmYyQSo1c1Ym7orWxLYvCrM2EmxFTANf8wXmmE7DWjhx5N`)
///
/// The identifier is kept opaque: ordering is plain string ordering, which is
/// what session output is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    /// Create a peer id, rejecting empty identifiers
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyPeerId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PeerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = PeerId::parse("  QmPeer \n").unwrap();
        assert_eq!(id.as_str(), "QmPeer");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(PeerId::parse("   "), Err(Error::EmptyPeerId));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&PeerId::from("QmA")).unwrap();
        assert_eq!(json, "\"QmA\"");
    }
}
