use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::peer::PeerId;

/// The set of peers observed online by one crawl, stamped with the crawl's start time.
///
/// Snapshots are immutable once built. A sequence of them is expected to be
/// ordered by `timestamp` (non-decreasing); equal timestamps keep their input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    timestamp: NaiveDateTime,
    peer_ids: BTreeSet<PeerId>,
}

impl Snapshot {
    pub fn new(timestamp: NaiveDateTime, peer_ids: impl IntoIterator<Item = PeerId>) -> Self {
        Self {
            timestamp,
            peer_ids: peer_ids.into_iter().collect(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn peer_ids(&self) -> &BTreeSet<PeerId> {
        &self.peer_ids
    }

    pub fn contains(&self, peer_id: &PeerId) -> bool {
        self.peer_ids.contains(peer_id)
    }

    pub fn len(&self) -> usize {
        self.peer_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peer_ids.is_empty()
    }

    pub fn into_peer_ids(self) -> BTreeSet<PeerId> {
        self.peer_ids
    }
}
