use chrono::NaiveDateTime;
use crawlscope_types::PeerId;
use serde::{Deserialize, Serialize};

/// One inferred period of continuous reachability for a peer.
///
/// `end` is `None` while the session is open, i.e. the peer was still online
/// at the most recently folded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInterval {
    pub peer_id: PeerId,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl SessionInterval {
    pub fn open(peer_id: PeerId, start: NaiveDateTime) -> Self {
        Self {
            peer_id,
            start,
            end: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of a closed session in whole seconds; `None` while open
    pub fn duration_seconds(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).num_seconds())
    }

    /// Whether the peer is considered online at `t` under this interval.
    ///
    /// Intervals are half-open: the closing timestamp is the first snapshot
    /// in which the peer was absent.
    pub fn covers(&self, t: NaiveDateTime) -> bool {
        self.start <= t && self.end.is_none_or(|end| t < end)
    }
}

/// Aggregate numbers over every closed interval of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub peers: usize,
    pub sessions: usize,
    pub total_seconds: i64,
    pub mean_seconds: f64,
    pub median_seconds: i64,
    pub max_seconds: i64,
}
