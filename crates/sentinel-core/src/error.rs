//! Error types for the fallible edges of sentinel-core.
//!
//! Parsing and normalization have no error path; only the mutation sink and
//! the exporters can fail.

/// Failure reported by a [`MutationSink`](crate::sink::MutationSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("alert {0} not found")]
    NotFound(String),
    #[error("mutation rejected by backend: {0}")]
    Rejected(String),
    #[error("backend I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
}
