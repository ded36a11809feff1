//! sentinel-feeds — alert feed adapters and mutation sinks for sentinel.
//!
//! Each feed adapter reads raw alert records from a source and pushes
//! [`FeedEvent`]s onto an async channel for the board. Sinks persist triage
//! decisions made on the board.

pub mod decode;
pub mod file;
pub mod line;
pub mod memory;

pub use file::{load_records, FileFeed, FileSink};
pub use line::LineFeed;
pub use memory::{MemorySink, SinkCall};

use sentinel_core::FeedEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed alert record on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("board channel closed")]
    ChannelClosed,
}

/// Trait implemented by each alert feed source.
pub trait AlertFeed: Send + 'static {
    /// Start the feed on the tokio runtime. The task ends when the source is
    /// exhausted or the receiver is dropped.
    fn spawn(self, tx: mpsc::Sender<FeedEvent>) -> JoinHandle<Result<(), FeedError>>;
}
