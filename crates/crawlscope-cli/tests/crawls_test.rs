use anyhow::Result;
use crawlscope_testing::{CrawlFixture, TestWorld};

#[test]
fn test_crawls_lists_in_fold_order() -> Result<()> {
    let world = TestWorld::new()
        .with_csv_crawl(CrawlFixture::at(30).reachable(&["QmA"]))
        .with_crawler_json(CrawlFixture::at(0).reachable(&["QmA"]))
        .with_csv_crawl(CrawlFixture::at(15).reachable(&["QmA"]));
    world.write_crawl_file("peerGraph_29-11-19--10:00:00_29-11-19--10:05:00.csv", "x;y\n")?;
    world.write_crawl_file("notes.txt", "not a crawl\n")?;

    let result = world.run(&["--format", "json", "crawls"])?;
    assert!(result.success(), "crawls failed: {}", result.stderr());

    let json = result.json()?;
    let crawls = json.as_array().expect("array");
    let formats: Vec<&str> = crawls.iter().filter_map(|c| c["format"].as_str()).collect();
    assert_eq!(formats, vec!["crawler-json", "legacy-csv", "legacy-csv"]);
    let starts: Vec<&str> = crawls.iter().filter_map(|c| c["start"].as_str()).collect();
    assert_eq!(
        starts,
        vec!["2019-11-29T10:00:00", "2019-11-29T10:15:00", "2019-11-29T10:30:00"]
    );
    Ok(())
}

#[test]
fn test_crawls_plain_on_empty_dir() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["crawls"])?;
    assert!(result.success(), "crawls failed: {}", result.stderr());
    assert!(result.stdout().contains("No crawl files"));
    Ok(())
}

#[test]
fn test_convert_writes_json_next_to_csv() -> Result<()> {
    let world = TestWorld::new()
        .with_csv_crawl(CrawlFixture::at(0).reachable(&["QmA", "QmB"]))
        .with_csv_crawl(CrawlFixture::at(15).reachable(&["QmA"]));

    let result = world.run(&["convert"])?;
    assert!(result.success(), "convert failed: {}", result.stderr());
    assert!(result.stdout().contains("Converted 2 crawl(s)"));

    let (name, _) = CrawlFixture::at(0).legacy_csv();
    let json_path = world.crawl_dir().join(name.replace(".csv", ".json"));
    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(json_path)?)?;
    assert_eq!(doc["start_timestamp"], "29-11-19--10:00:00");
    assert_eq!(doc["Nodes"][1]["NodeID"], "QmB");

    let listed = world.run(&["--format", "json", "crawls"])?.json()?;
    assert!(
        listed
            .as_array()
            .expect("array")
            .iter()
            .all(|c| c["format"] == "legacy-json")
    );
    Ok(())
}
