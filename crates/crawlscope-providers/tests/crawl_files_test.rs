use anyhow::Result;
use crawlscope_providers::{
    CrawlFormat, SnapshotFilter, SnapshotStream, convert_legacy_csv, detect_parser,
    discover_crawls, parse_crawl_file, write_legacy_json,
};
use crawlscope_types::PeerId;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CSV_BODY: &str = "\
QmA;[/ip4/1.2.3.4/tcp/4001 /ip6/::1/tcp/4001];true;go-ipfs/0.4.22/
QmB;[/ip4/5.6.7.8/tcp/4001];false;go-ipfs/0.4.21/
broken-line
QmC;[];true;
";

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn crawler_json(start: &str, end: &str) -> String {
    format!(
        r#"{{"start_timestamp":"{start}","end_timestamp":"{end}","found_nodes":[
            {{"id":"QmA","multiaddrs":["/ip4/1.2.3.4/tcp/4001"],"connection_error":null,
              "result":{{"agent_version":"kubo/0.18.0","supported_protocols":null,"crawl_begin_ts":"{start}","crawl_end_ts":"{end}","crawl_error":null,"plugin_data":null}}}},
            {{"id":"QmD","multiaddrs":null,"connection_error":"dial backoff","result":null}}
        ]}}"#
    )
}

#[test]
fn test_legacy_csv_is_parsed() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "visitedPeers_29-11-19--10:30:25_29-11-19--10:41:29.csv", CSV_BODY);

    let files = discover_crawls(dir.path())?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].format, CrawlFormat::LegacyCsv);

    let record = parse_crawl_file(&files[0])?;
    assert_eq!(record.nodes.len(), 3);
    assert_eq!(record.nodes[0].multiaddrs.len(), 2);
    assert_eq!(record.reachable_count(), 2);
    Ok(())
}

#[test]
fn test_crawler_json_is_parsed() -> Result<()> {
    let dir = TempDir::new()?;
    let name = "visitedPeers_01-03-21--12:00:00_01-03-21--12:30:00.json";
    write(
        dir.path(),
        name,
        &crawler_json("2021-03-01T12:00:00Z", "2021-03-01T12:30:00Z"),
    );

    let parser = detect_parser(&dir.path().join(name)).expect("parser");
    assert_eq!(parser.format(), CrawlFormat::CrawlerJson);

    let record = parser.parse(&dir.path().join(name))?;
    assert_eq!(record.nodes.len(), 2);
    assert!(record.nodes[0].reachable);
    assert_eq!(record.nodes[0].agent_version.as_deref(), Some("kubo/0.18.0"));
    assert!(!record.nodes[1].reachable);
    assert!(record.nodes[1].multiaddrs.is_empty());
    Ok(())
}

#[test]
fn test_window_read_from_content_when_name_lacks_it() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "visitedPeers_latest.json",
        &crawler_json("2021-03-01T12:00:00Z", "2021-03-01T12:30:00Z"),
    );

    let files = discover_crawls(dir.path())?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].window.start.to_string(), "2021-03-01 12:00:00");
    Ok(())
}

#[test]
fn test_discovery_orders_by_start_and_skips_noise() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "visitedPeers_30-11-19--10:00:00_30-11-19--10:10:00.csv", CSV_BODY);
    write(dir.path(), "visitedPeers_29-11-19--10:00:00_29-11-19--10:10:00.csv", CSV_BODY);
    write(dir.path(), "peerGraph_29-11-19--10:00:00_29-11-19--10:10:00.csv", "a;b\n");
    write(dir.path(), "visitedPeers_notes.txt", "hello");
    fs::create_dir(dir.path().join("visitedPeers_dir"))?;

    let names: Vec<String> = discover_crawls(dir.path())?
        .iter()
        .map(|f| f.file_name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "visitedPeers_29-11-19--10:00:00_29-11-19--10:10:00.csv",
            "visitedPeers_30-11-19--10:00:00_30-11-19--10:10:00.csv",
        ]
    );
    Ok(())
}

#[test]
fn test_missing_directory_is_an_error() {
    assert!(discover_crawls(Path::new("/definitely/not/here")).is_err());
}

#[test]
fn test_conversion_and_deduplication() -> Result<()> {
    let dir = TempDir::new()?;
    let csv_name = "visitedPeers_29-11-19--10:30:25_29-11-19--10:41:29.csv";
    write(dir.path(), csv_name, CSV_BODY);

    let doc = convert_legacy_csv(&dir.path().join(csv_name))?;
    assert_eq!(doc.start_timestamp, "29-11-19--10:30:25");
    assert_eq!(doc.end_timestamp, "29-11-19--10:41:29");
    assert_eq!(doc.nodes.len(), 3);

    let written = write_legacy_json(dir.path())?;
    assert_eq!(written.len(), 1);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written[0])?)?;
    assert_eq!(json["Nodes"][0]["NodeID"], "QmA");
    assert_eq!(json["Nodes"][1]["reachable"], false);

    let files = discover_crawls(dir.path())?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].format, CrawlFormat::LegacyJson);
    Ok(())
}

#[test]
fn test_snapshot_stream_applies_filter() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "visitedPeers_29-11-19--10:00:00_29-11-19--10:10:00.csv", CSV_BODY);
    write(dir.path(), "visitedPeers_29-11-19--11:00:00_29-11-19--11:10:00.csv", "QmB;[];true;\n");

    let files = discover_crawls(dir.path())?;
    let snapshots: Vec<_> = SnapshotStream::new(files, SnapshotFilter::default())
        .map(|item| item.map(|(_, snapshot)| snapshot))
        .collect::<Result<_, _>>()?;

    assert_eq!(snapshots.len(), 2);
    assert!(snapshots[0].contains(&PeerId::from("QmA")));
    assert!(!snapshots[0].contains(&PeerId::from("QmB")));
    assert!(snapshots[1].contains(&PeerId::from("QmB")));
    assert!(snapshots[0].timestamp() < snapshots[1].timestamp());
    Ok(())
}
