use chrono::{NaiveDate, NaiveDateTime};
use crawlscope_engine::{
    Error, SessionReconstructor, interval_rows, reconstruct_sessions, session_durations,
};
use crawlscope_types::{PeerId, Snapshot};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 11, 29)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn snap(ts: NaiveDateTime, ids: &[&str]) -> Snapshot {
    Snapshot::new(ts, ids.iter().map(|id| PeerId::from(*id)))
}

fn render(snapshots: &[Snapshot]) -> String {
    session_durations(snapshots)
        .expect("reconstruction should succeed")
        .iter()
        .map(|row| format!("{};{}", row.peer_id, row.duration_seconds))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_peer_dropping_out_and_late_joiner() {
    let (t1, t2, t3) = (at(10, 0), at(10, 10), at(10, 20));
    let table = reconstruct_sessions(&[
        snap(t1, &["A", "B"]),
        snap(t2, &["A"]),
        snap(t3, &["A", "C"]),
    ])
    .unwrap();

    let a = table.sessions(&PeerId::from("A")).unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!((a[0].start, a[0].end), (t1, Some(t3)));
    assert_eq!(a[0].duration_seconds(), Some(1200));

    let b = table.sessions(&PeerId::from("B")).unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!((b[0].start, b[0].end), (t1, Some(t2)));

    assert!(table.sessions(&PeerId::from("C")).is_none());
}

#[test]
fn test_reappearance_in_final_snapshot_opens_nothing() {
    let (t1, t2, t3) = (at(10, 0), at(10, 10), at(10, 20));
    let table =
        reconstruct_sessions(&[snap(t1, &["X"]), snap(t2, &[]), snap(t3, &["X"])]).unwrap();

    let x = table.sessions(&PeerId::from("X")).unwrap();
    assert_eq!(x.len(), 1);
    assert_eq!((x[0].start, x[0].end), (t1, Some(t2)));
}

#[test]
fn test_reappearance_before_final_snapshot_opens_second_session() {
    let table = reconstruct_sessions(&[
        snap(at(10, 0), &["X"]),
        snap(at(10, 10), &[]),
        snap(at(10, 20), &["X"]),
        snap(at(10, 30), &["X"]),
    ])
    .unwrap();

    let x = table.sessions(&PeerId::from("X")).unwrap();
    assert_eq!(x.len(), 2);
    assert_eq!(x[1].start, at(10, 20));
    assert_eq!(x[1].end, Some(at(10, 30)));
}

#[test]
fn test_empty_input() {
    assert_eq!(reconstruct_sessions(&[]).unwrap_err(), Error::EmptyInput);
    assert_eq!(
        SessionReconstructor::new().finish().unwrap_err(),
        Error::EmptyInput
    );
}

#[test]
fn test_non_monotonic_timestamps() {
    let err = reconstruct_sessions(&[
        snap(at(10, 10), &["A"]),
        snap(at(10, 0), &["A"]),
        snap(at(10, 20), &["A"]),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        Error::OrderingViolation {
            previous: at(10, 10),
            found: at(10, 0)
        }
    );
}

#[test]
fn test_final_snapshot_older_than_body() {
    let err = reconstruct_sessions(&[snap(at(10, 10), &["A"]), snap(at(10, 0), &["A"])])
        .unwrap_err();
    assert!(matches!(err, Error::OrderingViolation { .. }));
}

#[test]
fn test_streaming_matches_batch() {
    let snapshots = vec![
        snap(at(10, 0), &["QmA", "QmB"]),
        snap(at(10, 15), &["QmA", "QmC"]),
        snap(at(10, 30), &["QmB", "QmC"]),
        snap(at(10, 45), &["QmA", "QmB", "QmC"]),
        snap(at(11, 0), &["QmD"]),
    ];

    let mut reconstructor = SessionReconstructor::new();
    for snapshot in snapshots.iter().cloned() {
        reconstructor.push(snapshot).unwrap();
    }

    assert_eq!(
        reconstructor.finish().unwrap(),
        reconstruct_sessions(&snapshots).unwrap()
    );
}

#[test]
fn test_flapping_peers_report() {
    let snapshots = vec![
        snap(at(10, 0), &["QmA", "QmB"]),
        snap(at(10, 15), &["QmA", "QmC"]),
        snap(at(10, 30), &["QmB", "QmC"]),
        snap(at(10, 45), &["QmA", "QmB", "QmC"]),
        snap(at(11, 0), &["QmD"]),
    ];

    insta::assert_snapshot!(render(&snapshots), @r"
    QmA;1800
    QmA;900
    QmB;900
    QmB;1800
    QmC;2700
    ");
}

#[test]
fn test_interval_rows_keep_boundaries() {
    let table = reconstruct_sessions(&[
        snap(at(10, 0), &["QmA"]),
        snap(at(10, 5), &[]),
        snap(at(10, 10), &[]),
    ])
    .unwrap();

    let rows = interval_rows(&table);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start, at(10, 0));
    assert_eq!(rows[0].end, at(10, 5));
    assert_eq!(rows[0].duration_seconds, 300);
}
