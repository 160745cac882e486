use chrono::NaiveDateTime;
use crawlscope_engine::{Checkpoint, SessionReconstructor};
use crawlscope_providers::CrawlFile;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

pub const CHECKPOINT_VERSION: u32 = 2;

/// Position of the last crawl file folded into a checkpoint.
///
/// Ordered like discovery output: start timestamp, then file stem. The stem
/// keeps a crawl converted from CSV to JSON at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrawlCursor {
    pub start: NaiveDateTime,
    pub stem: String,
}

impl CrawlCursor {
    pub fn of(file: &CrawlFile) -> Self {
        Self {
            start: file.window.start,
            stem: file.stem().to_string(),
        }
    }

    /// Whether `file` comes after this cursor in fold order
    pub fn precedes(&self, file: &CrawlFile) -> bool {
        (file.window.start, file.stem()) > (self.start, self.stem.as_str())
    }
}

/// On-disk checkpoint of an interrupted session reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointFile {
    pub version: u32,
    /// Snapshot filter the folded crawls were read with
    pub include_unreachable: bool,
    pub cursor: Option<CrawlCursor>,
    pub reconstruction: Checkpoint,
}

impl CheckpointFile {
    pub fn new(
        include_unreachable: bool,
        cursor: Option<CrawlCursor>,
        reconstructor: &SessionReconstructor,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            include_unreachable,
            cursor,
            reconstruction: reconstructor.checkpoint(),
        }
    }

    /// Load a checkpoint, or `None` when the file does not exist yet
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let checkpoint: CheckpointFile = serde_json::from_str(&content)?;
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(Error::Checkpoint(format!(
                "unsupported checkpoint version {} in {}",
                checkpoint.version,
                path.display()
            )));
        }
        Ok(Some(checkpoint))
    }

    /// Write via a sibling temp file so an interrupted save keeps the old checkpoint
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec(self)?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn into_reconstructor(self) -> Result<SessionReconstructor> {
        Ok(SessionReconstructor::resume(self.reconstruction)?)
    }
}
