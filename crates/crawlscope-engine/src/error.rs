use chrono::NaiveDateTime;
use crawlscope_types::PeerId;
use std::fmt;

/// Result type for crawlscope-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a reconstruction run.
///
/// None of these leave a usable partial result: session boundaries are
/// positional, so a skipped update corrupts every later interval of the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No snapshot was supplied, so there is no timestamp to close sessions with
    EmptyInput,

    /// A snapshot is older than one that was already consumed
    OrderingViolation {
        previous: NaiveDateTime,
        found: NaiveDateTime,
    },

    /// A peer went offline but has no open trailing interval (fold defect)
    MissingOpenInterval { peer_id: PeerId, at: NaiveDateTime },

    /// Checkpoint content is inconsistent with the fold invariants
    Checkpoint(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "no snapshots to reconstruct sessions from"),
            Error::OrderingViolation { previous, found } => write!(
                f,
                "snapshots out of order: {} follows {}",
                found, previous
            ),
            Error::MissingOpenInterval { peer_id, at } => write!(
                f,
                "internal error: peer {} went offline at {} without an open session",
                peer_id, at
            ),
            Error::Checkpoint(msg) => write!(f, "invalid checkpoint: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
