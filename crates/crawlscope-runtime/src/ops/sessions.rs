use crawlscope_engine::{SessionReconstructor, SessionSummary, SessionTable, interval_rows};
use crawlscope_providers::{SnapshotFilter, SnapshotStream, discover_crawls};
use std::path::{Path, PathBuf};

use crate::checkpoint::{CheckpointFile, CrawlCursor};
use crate::report::{ReportWriter, create_report_file};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct SessionsRequest {
    pub crawl_dir: PathBuf,
    pub include_unreachable: bool,
    /// Resume from and update this checkpoint file
    pub checkpoint: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SessionsOutcome {
    pub table: SessionTable,
    /// Crawl files found in the crawl directory
    pub crawls_found: usize,
    /// Crawl files folded during this run
    pub crawls_folded: usize,
    /// Snapshots behind the table, including those restored from a checkpoint
    pub snapshots: usize,
}

impl SessionsOutcome {
    pub fn summary(&self) -> SessionSummary {
        self.table.summary()
    }

    /// Write `peer;duration` rows (or full intervals) and return the row count
    pub fn write_report(&self, path: &Path, intervals: bool) -> Result<usize> {
        let writer = ReportWriter::for_path(path);
        let out = create_report_file(path)?;
        if intervals {
            let rows = interval_rows(&self.table);
            writer.write_intervals(out, &rows)?;
            Ok(rows.len())
        } else {
            let rows = self.table.durations();
            writer.write_sessions(out, &rows)?;
            Ok(rows.len())
        }
    }
}

pub struct SessionService {
    request: SessionsRequest,
}

impl SessionService {
    pub fn new(request: SessionsRequest) -> Self {
        Self { request }
    }

    pub fn run(&self) -> Result<SessionsOutcome> {
        let request = &self.request;
        let files = discover_crawls(&request.crawl_dir)?;
        let crawls_found = files.len();

        let (mut reconstructor, mut cursor) = self.restore()?;
        let pending: Vec<_> = match &cursor {
            Some(cursor) => files.into_iter().filter(|f| cursor.precedes(f)).collect(),
            None => files,
        };
        let crawls_folded = pending.len();
        tracing::info!(
            found = crawls_found,
            to_fold = crawls_folded,
            resumed = cursor.is_some(),
            "reconstructing sessions"
        );

        let filter = SnapshotFilter::new(request.include_unreachable);
        for item in SnapshotStream::new(pending, filter) {
            let (file, snapshot) = item?;
            tracing::debug!(
                file = file.file_name(),
                peers = snapshot.len(),
                "folding crawl"
            );
            reconstructor.push(snapshot)?;
            cursor = Some(CrawlCursor::of(&file));
        }

        if let Some(path) = &request.checkpoint {
            CheckpointFile::new(request.include_unreachable, cursor, &reconstructor)
                .save(path)?;
            tracing::debug!(path = %path.display(), "checkpoint written");
        }

        let snapshots = reconstructor.consumed();
        let table = reconstructor.finish()?;
        tracing::info!(
            peers = table.peer_count(),
            sessions = table.session_count(),
            "sessions reconstructed"
        );

        Ok(SessionsOutcome {
            table,
            crawls_found,
            crawls_folded,
            snapshots,
        })
    }

    fn restore(&self) -> Result<(SessionReconstructor, Option<CrawlCursor>)> {
        let Some(path) = &self.request.checkpoint else {
            return Ok((SessionReconstructor::new(), None));
        };
        let Some(checkpoint) = CheckpointFile::load(path)? else {
            tracing::debug!(path = %path.display(), "no checkpoint yet, starting fresh");
            return Ok((SessionReconstructor::new(), None));
        };

        if checkpoint.include_unreachable != self.request.include_unreachable {
            return Err(Error::Checkpoint(format!(
                "{} was written with include_unreachable = {}",
                path.display(),
                checkpoint.include_unreachable
            )));
        }

        let cursor = checkpoint.cursor.clone();
        Ok((checkpoint.into_reconstructor()?, cursor))
    }
}
