use chrono::NaiveDateTime;
use crawlscope_types::PeerId;
use serde::Serialize;

use crate::session::SessionTable;

/// Full interval row, for reports that keep session boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalRow {
    pub peer_id: PeerId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_seconds: i64,
}

/// Closed intervals of the table in table order; open ones are skipped
pub fn interval_rows(table: &SessionTable) -> Vec<IntervalRow> {
    table
        .intervals()
        .filter_map(|s| {
            let end = s.end?;
            Some(IntervalRow {
                peer_id: s.peer_id.clone(),
                start: s.start,
                end,
                duration_seconds: (end - s.start).num_seconds(),
            })
        })
        .collect()
}
