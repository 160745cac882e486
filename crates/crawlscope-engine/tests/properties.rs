use chrono::{Duration, NaiveDate, NaiveDateTime};
use crawlscope_engine::reconstruct_sessions;
use crawlscope_types::{PeerId, Snapshot};
use proptest::collection;
use proptest::prelude::*;
use std::collections::BTreeSet;

const POOL: [&str; 6] = ["QmA", "QmB", "QmC", "QmD", "QmE", "QmF"];

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 11, 29)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build snapshots from (gap in minutes, membership bitmask) pairs
fn build(steps: &[(i64, u8)]) -> Vec<Snapshot> {
    let mut ts = base();
    steps
        .iter()
        .map(|(gap, mask)| {
            ts += Duration::minutes(*gap);
            let ids = POOL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| PeerId::from(*id));
            Snapshot::new(ts, ids)
        })
        .collect()
}

proptest! {
    #[test]
    fn test_intervals_are_closed_on_input_timestamps(
        steps in collection::vec((0i64..30, any::<u8>()), 1..20)
    ) {
        let snapshots = build(&steps);
        let stamps: BTreeSet<NaiveDateTime> = snapshots.iter().map(Snapshot::timestamp).collect();
        let table = reconstruct_sessions(&snapshots).unwrap();

        prop_assert!(table.is_finalized());
        for interval in table.intervals() {
            let end = interval.end.unwrap();
            prop_assert!(interval.start <= end);
            prop_assert!(stamps.contains(&interval.start));
            prop_assert!(stamps.contains(&end));
        }
    }

    #[test]
    fn test_intervals_never_overlap(
        steps in collection::vec((0i64..30, any::<u8>()), 1..20)
    ) {
        let table = reconstruct_sessions(&build(&steps)).unwrap();
        for (_, sessions) in table.iter() {
            for pair in sessions.windows(2) {
                prop_assert!(pair[0].end.unwrap() <= pair[1].start);
            }
        }
    }

    #[test]
    fn test_table_reproduces_membership(
        steps in collection::vec((1i64..30, any::<u8>()), 2..20)
    ) {
        let snapshots = build(&steps);
        let table = reconstruct_sessions(&snapshots).unwrap();

        // The final snapshot only closes sessions, so it is excluded.
        for snapshot in &snapshots[..snapshots.len() - 1] {
            let t = snapshot.timestamp();
            let online: BTreeSet<&PeerId> = table
                .intervals()
                .filter(|s| s.covers(t))
                .map(|s| &s.peer_id)
                .collect();
            let expected: BTreeSet<&PeerId> = snapshot.peer_ids().iter().collect();
            prop_assert_eq!(online, expected);
        }
    }

    #[test]
    fn test_repeated_snapshot_changes_nothing(
        steps in collection::vec((0i64..30, any::<u8>()), 2..20),
        pick in any::<proptest::sample::Index>()
    ) {
        let snapshots = build(&steps);
        let i = pick.index(snapshots.len() - 1);

        let mut repeated = snapshots.clone();
        repeated.insert(i + 1, snapshots[i].clone());

        prop_assert_eq!(
            reconstruct_sessions(&repeated).unwrap(),
            reconstruct_sessions(&snapshots).unwrap()
        );
    }
}
