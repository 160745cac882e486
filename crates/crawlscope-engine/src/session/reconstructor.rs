use chrono::NaiveDateTime;
use crawlscope_types::Snapshot;
use serde::{Deserialize, Serialize};

use super::fold::FoldState;
use super::table::SessionTable;
use crate::{Error, Result};

/// Streaming front-end of the session fold.
///
/// Snapshots are pushed one at a time. The most recent one is held back
/// because it may turn out to be the last: only `finish` knows that, and the
/// last snapshot closes sessions without opening any.
///
/// ```
/// use chrono::NaiveDate;
/// use crawlscope_engine::SessionReconstructor;
/// use crawlscope_types::{PeerId, Snapshot};
///
/// let at = |h| NaiveDate::from_ymd_opt(2019, 11, 29).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let mut reconstructor = SessionReconstructor::new();
/// reconstructor.push(Snapshot::new(at(1), [PeerId::from("QmA")])).unwrap();
/// reconstructor.push(Snapshot::new(at(3), [PeerId::from("QmA")])).unwrap();
///
/// let table = reconstructor.finish().unwrap();
/// assert_eq!(table.durations()[0].duration_seconds, 7200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionReconstructor {
    state: FoldState,
    pending: Option<Snapshot>,
    consumed: usize,
}

/// Serializable state of an unfinished reconstruction.
///
/// Restoring it with [`SessionReconstructor::resume`] continues the fold as if
/// the run had never stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub state: FoldState,
    pub pending: Option<Snapshot>,
    pub consumed: usize,
}

impl SessionReconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a reconstruction from a checkpoint, validating its invariants
    pub fn resume(checkpoint: Checkpoint) -> Result<Self> {
        checkpoint.state.validate()?;

        if let (Some(pending), Some(last)) =
            (&checkpoint.pending, checkpoint.state.last_timestamp())
            && pending.timestamp() < last
        {
            return Err(Error::Checkpoint(
                "pending snapshot is older than the folded state".to_string(),
            ));
        }

        Ok(Self {
            state: checkpoint.state,
            pending: checkpoint.pending,
            consumed: checkpoint.consumed,
        })
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            pending: self.pending.clone(),
            consumed: self.consumed,
        }
    }

    /// Accept the next snapshot, folding the previously held one
    pub fn push(&mut self, snapshot: Snapshot) -> Result<()> {
        if let Some(previous) = self.latest_timestamp()
            && snapshot.timestamp() < previous
        {
            return Err(Error::OrderingViolation {
                previous,
                found: snapshot.timestamp(),
            });
        }

        if let Some(held) = self.pending.replace(snapshot) {
            let state = std::mem::take(&mut self.state);
            self.state = state.apply(&held)?;
        }
        self.consumed += 1;
        Ok(())
    }

    /// Treat the held snapshot as the last one and close all open sessions
    pub fn finish(self) -> Result<SessionTable> {
        let last = self.pending.ok_or(Error::EmptyInput)?;
        self.state.finalize(&last)
    }

    /// Timestamp of the newest snapshot accepted so far
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.pending
            .as_ref()
            .map(Snapshot::timestamp)
            .or_else(|| self.state.last_timestamp())
    }

    /// Number of snapshots accepted, including those from a resumed checkpoint
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Sessions folded so far, with the trailing ones still open
    pub fn partial_table(&self) -> &SessionTable {
        self.state.table()
    }
}
