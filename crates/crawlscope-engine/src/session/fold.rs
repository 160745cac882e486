use chrono::NaiveDateTime;
use crawlscope_types::{PeerId, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::table::SessionTable;
use crate::{Error, Result};

/// Accumulator of the session fold: the online set plus the table built so far.
///
/// `apply` is the single step of a left fold over snapshots; `finalize`
/// consumes the final snapshot, which only closes what is still open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldState {
    online: BTreeSet<PeerId>,
    table: SessionTable,
    last_timestamp: Option<NaiveDateTime>,
}

impl FoldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one non-final snapshot into the state.
    ///
    /// Peers present now but not before open a session at the snapshot's
    /// timestamp; peers present before but not now close theirs at it. The
    /// online set is then replaced by the snapshot's peers.
    pub fn apply(mut self, snapshot: &Snapshot) -> Result<Self> {
        let at = snapshot.timestamp();
        self.check_order(at)?;

        let current = snapshot.peer_ids();
        let newly_online: Vec<PeerId> = current.difference(&self.online).cloned().collect();
        let newly_offline: Vec<PeerId> = self.online.difference(current).cloned().collect();

        for peer_id in newly_online {
            self.table.open(peer_id, at);
        }
        for peer_id in &newly_offline {
            self.table.close(peer_id, at)?;
        }

        self.online = current.clone();
        self.last_timestamp = Some(at);
        Ok(self)
    }

    /// Close every still-open session at the final snapshot's timestamp.
    ///
    /// The final snapshot's own peers are not consulted: a peer first seen in
    /// it gets no session, and a peer missing from it is still closed at its
    /// timestamp rather than at an earlier one.
    pub fn finalize(mut self, last: &Snapshot) -> Result<SessionTable> {
        let at = last.timestamp();
        self.check_order(at)?;

        for peer_id in &self.online {
            self.table.close(peer_id, at)?;
        }
        Ok(self.table)
    }

    pub fn online(&self) -> &BTreeSet<PeerId> {
        &self.online
    }

    pub fn table(&self) -> &SessionTable {
        &self.table
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.last_timestamp
    }

    fn check_order(&self, at: NaiveDateTime) -> Result<()> {
        match self.last_timestamp {
            Some(previous) if at < previous => Err(Error::OrderingViolation {
                previous,
                found: at,
            }),
            _ => Ok(()),
        }
    }

    /// Every online peer must own exactly the open trailing interval, and
    /// nobody else may have one.
    pub(crate) fn validate(&self) -> Result<()> {
        self.table.validate()?;

        let open: BTreeSet<&PeerId> = self.table.open_peers().collect();
        let online: BTreeSet<&PeerId> = self.online.iter().collect();
        if open != online {
            return Err(Error::Checkpoint(
                "online set does not match open sessions".to_string(),
            ));
        }

        if let Some(last) = self.last_timestamp
            && self.table.intervals().any(|s| s.start > last)
        {
            return Err(Error::Checkpoint(
                "session starts after the last folded snapshot".to_string(),
            ));
        }
        Ok(())
    }
}
