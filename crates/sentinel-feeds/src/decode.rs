//! Record decoding for file and stream sources.
//!
//! A document is either a JSON array of records or JSON lines (one record per
//! non-blank line).

use crate::FeedError;
use sentinel_core::RawAlertRecord;

pub fn decode_line(line: &str, number: usize) -> Result<RawAlertRecord, FeedError> {
    serde_json::from_str(line).map_err(|source| FeedError::Decode {
        line: number,
        source,
    })
}

pub fn decode_document(text: &str) -> Result<Vec<RawAlertRecord>, FeedError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| FeedError::Decode { line: 1, source });
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| decode_line(line, idx + 1))
        .collect()
}
