// Engine module - session inference over crawl snapshots.
// Sits between parsed snapshots (types/providers) and report writing (runtime).

pub mod error;
pub mod export;
pub mod protocols;
pub mod session;

pub use error::{Error, Result};
pub use export::{IntervalRow, interval_rows};
pub use protocols::{ProtocolCensus, ProtocolRow, transport_of};
pub use session::{
    Checkpoint, FoldState, SessionInterval, SessionReconstructor, SessionSummary, SessionTable,
};

use crawlscope_types::{SessionDuration, Snapshot};

// Façade API - stable entry points for the runtime layer

/// Reconstruct per-peer sessions from snapshots ordered by timestamp.
///
/// Every snapshot but the last is folded with [`FoldState::apply`]; the last
/// one only supplies the timestamp at which all remaining sessions close. A
/// peer that first shows up in the last snapshot therefore gets no session,
/// and sessions running at crawl stop are cut at the last crawl's start.
pub fn reconstruct_sessions(snapshots: &[Snapshot]) -> Result<SessionTable> {
    let (last, body) = snapshots.split_last().ok_or(Error::EmptyInput)?;
    let state = body
        .iter()
        .try_fold(FoldState::new(), |state, snapshot| state.apply(snapshot))?;
    state.finalize(last)
}

/// Reconstruct sessions and reduce them to `(peer, seconds)` rows
pub fn session_durations(snapshots: &[Snapshot]) -> Result<Vec<SessionDuration>> {
    reconstruct_sessions(snapshots).map(|table| table.durations())
}
