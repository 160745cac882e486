use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::filename::{is_crawl_file_name, window_from_path};
use crate::registry::detect_parser;
use crate::traits::CrawlFile;
use crate::{Error, Result};

/// List the crawl files of `dir` in fold order.
///
/// Only the top level of `dir` is scanned. Files are ordered by crawl start,
/// then by file stem. When a crawl exists both as CSV and as converted JSON,
/// only the JSON file is kept so the crawl is not counted twice. Files whose
/// format or crawl window cannot be determined are skipped with a warning.
pub fn discover_crawls(dir: &Path) -> Result<Vec<CrawlFile>> {
    if !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("crawl directory not found: {}", dir.display()),
        )));
    }

    let mut by_stem: BTreeMap<String, CrawlFile> = BTreeMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !entry.file_type().is_file() || !is_crawl_file_name(name) {
            continue;
        }

        let Some(parser) = detect_parser(path) else {
            tracing::warn!(file = %path.display(), "unrecognized crawl file format, skipping");
            continue;
        };

        let window = match window_from_path(path) {
            Some(window) => Some(window),
            None => parser.read_window(path).unwrap_or_else(|err| {
                tracing::warn!(file = %path.display(), error = %err, "cannot read crawl window");
                None
            }),
        };
        let Some(window) = window else {
            tracing::warn!(file = %path.display(), "crawl file without timestamps, skipping");
            continue;
        };

        let file = CrawlFile {
            path: path.to_path_buf(),
            window,
            format: parser.format(),
        };
        let stem = file.stem().to_string();

        match by_stem.get(&stem) {
            Some(existing) if existing.format >= file.format => {
                tracing::debug!(kept = %existing.path.display(), dropped = %path.display(), "duplicate crawl");
            }
            _ => {
                by_stem.insert(stem, file);
            }
        }
    }

    let mut files: Vec<CrawlFile> = by_stem.into_values().collect();
    files.sort_by(|a, b| {
        a.window
            .start
            .cmp(&b.window.start)
            .then_with(|| a.stem().cmp(b.stem()))
    });

    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered crawl files");
    Ok(files)
}
