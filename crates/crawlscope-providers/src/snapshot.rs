use crawlscope_types::{CrawlRecord, PeerId, Snapshot};

use crate::Result;
use crate::registry::parse_crawl_file;
use crate::traits::CrawlFile;

/// Decides which crawled nodes count as online in a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotFilter {
    /// Count nodes that were found but could not be connected to
    pub include_unreachable: bool,
}

impl SnapshotFilter {
    pub fn new(include_unreachable: bool) -> Self {
        Self {
            include_unreachable,
        }
    }

    /// Build the snapshot of a crawl, stamped with the crawl's start time.
    ///
    /// Nodes without an identifier are dropped here so they never reach the
    /// session fold.
    pub fn apply(&self, record: &CrawlRecord) -> Snapshot {
        let mut missing_ids = 0usize;
        let peers: Vec<PeerId> = record
            .nodes
            .iter()
            .filter(|node| node.reachable || self.include_unreachable)
            .filter_map(|node| match PeerId::parse(&node.id) {
                Ok(id) => Some(id),
                Err(_) => {
                    missing_ids += 1;
                    None
                }
            })
            .collect();

        if missing_ids > 0 {
            tracing::warn!(count = missing_ids, "dropped crawled nodes without peer id");
        }
        Snapshot::new(record.window.start, peers)
    }
}

/// Parses crawl files lazily, one at a time, in the given order
pub struct CrawlStream {
    files: std::vec::IntoIter<CrawlFile>,
}

impl CrawlStream {
    pub fn new(files: Vec<CrawlFile>) -> Self {
        Self {
            files: files.into_iter(),
        }
    }
}

impl Iterator for CrawlStream {
    type Item = Result<(CrawlFile, CrawlRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        let file = self.files.next()?;
        tracing::debug!(file = %file.path.display(), format = %file.format, "reading crawl");
        Some(parse_crawl_file(&file).map(|record| (file, record)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.files.size_hint()
    }
}

/// Snapshots of crawl files, produced lazily so only one crawl is in memory
pub struct SnapshotStream {
    crawls: CrawlStream,
    filter: SnapshotFilter,
}

impl SnapshotStream {
    pub fn new(files: Vec<CrawlFile>, filter: SnapshotFilter) -> Self {
        Self {
            crawls: CrawlStream::new(files),
            filter,
        }
    }
}

impl Iterator for SnapshotStream {
    type Item = Result<(CrawlFile, Snapshot)>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.crawls.next()?;
        Some(item.map(|(file, record)| {
            let snapshot = self.filter.apply(&record);
            (file, snapshot)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.crawls.size_hint()
    }
}
