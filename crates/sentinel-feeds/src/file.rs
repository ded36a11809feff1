//! File source and file-backed sink.
//!
//! [`FileFeed`] reads a whole document once and delivers it as a single
//! snapshot. [`FileSink`] rewrites the same kind of document in place when
//! alerts are triaged, always as a pretty-printed JSON array.

use crate::decode::decode_document;
use crate::{AlertFeed, FeedError};
use sentinel_core::{AlertStatus, FeedEvent, MutationSink, RawAlertRecord, SinkError};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Read every record in `path` (JSON array or JSON lines).
pub fn load_records(path: &Path) -> Result<Vec<RawAlertRecord>, FeedError> {
    let text = std::fs::read_to_string(path)?;
    decode_document(&text)
}

// ---------------------------------------------------------------------------
// FileFeed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AlertFeed for FileFeed {
    fn spawn(self, tx: mpsc::Sender<FeedEvent>) -> JoinHandle<Result<(), FeedError>> {
        tokio::spawn(async move {
            let text = tokio::fs::read_to_string(&self.path).await?;
            let records = decode_document(&text)?;
            tracing::debug!(path = %self.path.display(), count = records.len(), "file feed: snapshot read");
            tx.send(FeedEvent::Snapshot(records))
                .await
                .map_err(|_| FeedError::ChannelClosed)
        })
    }
}

// ---------------------------------------------------------------------------
// FileSink
// ---------------------------------------------------------------------------

/// Persists triage decisions to a JSON document. Every call reads the file,
/// applies the change and writes it back; a call naming an unknown id changes
/// nothing.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<RawAlertRecord>, SinkError> {
        load_records(&self.path).map_err(|err| match err {
            FeedError::Io(io) => SinkError::Io(io),
            other => SinkError::Rejected(other.to_string()),
        })
    }

    fn write(&self, records: &[RawAlertRecord]) -> Result<(), SinkError> {
        let body = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

fn ensure_known(records: &[RawAlertRecord], ids: &[String]) -> Result<(), SinkError> {
    match ids.iter().find(|id| !records.iter().any(|r| &r.id == *id)) {
        Some(missing) => Err(SinkError::NotFound(missing.clone())),
        None => Ok(()),
    }
}

impl MutationSink for FileSink {
    fn set_status(&mut self, ids: &[String], status: AlertStatus) -> Result<(), SinkError> {
        let mut records = self.read()?;
        ensure_known(&records, ids)?;
        for record in records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.status = Some(status.as_str().to_string());
        }
        self.write(&records)?;
        tracing::debug!(path = %self.path.display(), %status, count = ids.len(), "file sink: status written");
        Ok(())
    }

    fn delete(&mut self, ids: &[String]) -> Result<(), SinkError> {
        let mut records = self.read()?;
        ensure_known(&records, ids)?;
        records.retain(|r| !ids.contains(&r.id));
        self.write(&records)?;
        tracing::debug!(path = %self.path.display(), count = ids.len(), "file sink: alerts deleted");
        Ok(())
    }
}
