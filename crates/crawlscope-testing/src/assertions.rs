//! Assertions over reports written by the CLI.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Read a `peer;duration` session report into `(peer, seconds)` pairs.
pub fn read_session_report(path: &Path) -> Result<Vec<(String, i64)>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;

    body.lines()
        .map(|line| -> Result<(String, i64)> {
            let (peer, seconds) = line
                .split_once(';')
                .with_context(|| format!("Malformed report line: {}", line))?;
            Ok((peer.to_string(), seconds.parse()?))
        })
        .collect()
}

/// Assert a session report holds exactly `expected`, in order.
pub fn assert_session_report(path: &Path, expected: &[(&str, i64)]) -> Result<()> {
    let actual = read_session_report(path)?;
    let expected: Vec<(String, i64)> = expected
        .iter()
        .map(|(peer, seconds)| (peer.to_string(), *seconds))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected session rows {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert the `summary` of `sessions --format json` output.
pub fn assert_session_summary(json: &Value, sessions: u64, peers: u64) -> Result<()> {
    let summary = json
        .get("summary")
        .context("Expected 'summary' object in JSON")?;

    let actual_sessions = summary["sessions"].as_u64().context("summary.sessions")?;
    let actual_peers = summary["peers"].as_u64().context("summary.peers")?;
    if (actual_sessions, actual_peers) != (sessions, peers) {
        anyhow::bail!(
            "Expected {} sessions of {} peers, got {} of {}",
            sessions,
            peers,
            actual_sessions,
            actual_peers
        );
    }
    Ok(())
}
