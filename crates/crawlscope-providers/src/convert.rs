use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::filename::{is_crawl_file_name, split_crawl_filename};
use crate::legacy::{LegacyCrawlJson, LegacyNodeJson, read_legacy_csv_nodes};
use crate::{Error, Result};

/// Convert one legacy CSV crawl into the JSON layout.
///
/// Timestamps are copied verbatim from the file name.
pub fn convert_legacy_csv(path: &Path) -> Result<LegacyCrawlJson> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let (start, end) = split_crawl_filename(name).ok_or_else(|| {
        Error::Parse(format!("not a crawl file name: {}", path.display()))
    })?;

    let nodes = read_legacy_csv_nodes(path)?;
    Ok(LegacyCrawlJson {
        start_timestamp: start.to_string(),
        end_timestamp: end.to_string(),
        nodes: nodes.iter().map(LegacyNodeJson::from).collect(),
    })
}

/// Convert every legacy CSV crawl in `dir`, writing `<stem>.json` next to it.
///
/// Existing JSON files are overwritten. Returns the written paths in name order.
pub fn write_legacy_json(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        let is_candidate = entry.file_type().is_file()
            && path.extension().is_some_and(|e| e == "csv")
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_crawl_file_name);
        if !is_candidate {
            continue;
        }

        let doc = convert_legacy_csv(path)?;
        let target = path.with_extension("json");
        let writer = BufWriter::new(File::create(&target)?);
        serde_json::to_writer(writer, &doc)?;

        tracing::info!(from = %path.display(), to = %target.display(), nodes = doc.nodes.len(), "converted crawl");
        written.push(target);
    }

    Ok(written)
}
