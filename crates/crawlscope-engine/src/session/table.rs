use chrono::NaiveDateTime;
use crawlscope_types::{PeerId, SessionDuration};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{SessionInterval, SessionSummary};
use crate::{Error, Result};

/// Per-peer session history.
///
/// Invariants kept by the fold:
/// - a peer's intervals are chronological and do not overlap
/// - at most one interval per peer is open, and only the last one
///
/// Peers are kept in id order, so every iteration over the table is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionTable {
    peers: BTreeMap<PeerId, Vec<SessionInterval>>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open interval for `peer_id` starting at `at`
    pub(crate) fn open(&mut self, peer_id: PeerId, at: NaiveDateTime) {
        let sessions = self.peers.entry(peer_id.clone()).or_default();
        debug_assert!(sessions.last().is_none_or(|s| !s.is_open()));
        sessions.push(SessionInterval::open(peer_id, at));
    }

    /// Close the trailing open interval of `peer_id` at `at`
    pub(crate) fn close(&mut self, peer_id: &PeerId, at: NaiveDateTime) -> Result<()> {
        let trailing = self
            .peers
            .get_mut(peer_id)
            .and_then(|sessions| sessions.last_mut())
            .filter(|s| s.is_open());

        match trailing {
            Some(session) => {
                session.end = Some(at);
                Ok(())
            }
            None => Err(Error::MissingOpenInterval {
                peer_id: peer_id.clone(),
                at,
            }),
        }
    }

    pub fn sessions(&self, peer_id: &PeerId) -> Option<&[SessionInterval]> {
        self.peers.get(peer_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeerId, &[SessionInterval])> {
        self.peers.iter().map(|(id, s)| (id, s.as_slice()))
    }

    /// All intervals, peer by peer, each peer's in chronological order
    pub fn intervals(&self) -> impl Iterator<Item = &SessionInterval> {
        self.peers.values().flatten()
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    pub fn session_count(&self) -> usize {
        self.peers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// True once every interval has an end
    pub fn is_finalized(&self) -> bool {
        self.intervals().all(|s| !s.is_open())
    }

    /// Peers whose trailing interval is open
    pub fn open_peers(&self) -> impl Iterator<Item = &PeerId> {
        self.peers
            .iter()
            .filter(|(_, s)| s.last().is_some_and(SessionInterval::is_open))
            .map(|(id, _)| id)
    }

    /// One `(peer, seconds)` row per closed interval, in table order.
    ///
    /// Open intervals have no duration yet and are left out.
    pub fn durations(&self) -> Vec<SessionDuration> {
        self.intervals()
            .filter_map(|s| {
                s.duration_seconds().map(|duration_seconds| SessionDuration {
                    peer_id: s.peer_id.clone(),
                    duration_seconds,
                })
            })
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        let mut durations: Vec<i64> = self
            .intervals()
            .filter_map(SessionInterval::duration_seconds)
            .collect();
        durations.sort_unstable();

        let sessions = durations.len();
        let total_seconds: i64 = durations.iter().sum();
        let mean_seconds = if sessions == 0 {
            0.0
        } else {
            total_seconds as f64 / sessions as f64
        };
        let median_seconds = durations.get(sessions / 2).copied().unwrap_or(0);
        let max_seconds = durations.last().copied().unwrap_or(0);

        SessionSummary {
            peers: self.peer_count(),
            sessions,
            total_seconds,
            mean_seconds,
            median_seconds,
            max_seconds,
        }
    }

    /// Check the per-peer ordering invariants; used when loading checkpoints
    pub(crate) fn validate(&self) -> Result<()> {
        for (peer_id, sessions) in &self.peers {
            for (i, session) in sessions.iter().enumerate() {
                if &session.peer_id != peer_id {
                    return Err(Error::Checkpoint(format!(
                        "interval of {} filed under {}",
                        session.peer_id, peer_id
                    )));
                }
                let is_last = i + 1 == sessions.len();
                match session.end {
                    None if !is_last => {
                        return Err(Error::Checkpoint(format!(
                            "peer {} has an open interval before its last one",
                            peer_id
                        )));
                    }
                    Some(end) if end < session.start => {
                        return Err(Error::Checkpoint(format!(
                            "peer {} has an interval ending before it starts",
                            peer_id
                        )));
                    }
                    _ => {}
                }
                if let Some(next) = sessions.get(i + 1)
                    && session.end.is_some_and(|end| end > next.start)
                {
                    return Err(Error::Checkpoint(format!(
                        "peer {} has overlapping intervals",
                        peer_id
                    )));
                }
            }
        }
        Ok(())
    }
}
