use serde::{Deserialize, Serialize};

use super::peer::PeerId;

/// One finished session, reduced to its length.
///
/// A peer with several sessions yields several rows; nothing is aggregated per peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDuration {
    pub peer_id: PeerId,
    pub duration_seconds: i64,
}
