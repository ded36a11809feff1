//! sentinel-core — workflow-failure alert triage core library.
//!
//! This crate turns raw alert records into the normalized view every consumer
//! works from, and shapes that view for triage.
//!
//! # Architecture
//!
//! ```text
//! RawAlertRecord ──► Parser ──► Normalizer ──► Board ──► Search / Group / Analytics
//!                                                │
//!                                                └──► Export
//! ```
//!
//! Parsing and normalization are pure and synchronous. Feeds that fill the
//! board and sinks that persist triage decisions live in `sentinel-feeds`.

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod group;
pub mod normalizer;
pub mod parser;
pub mod search;
pub mod sink;
pub mod store;
pub mod types;

pub use error::{ExportError, SinkError};
pub use normalizer::{normalize, NormalizedAlert, Normalizer, Origin, Placeholders, Resolved};
pub use parser::{parse, Field, ParsedFields};
pub use sink::MutationSink;
pub use store::AlertBoard;
pub use types::{AlertStatus, FeedEvent, RawAlertRecord, Severity};
