//! Test builders — ergonomic constructors for `RawAlertRecord`, boards and
//! normalized alerts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use sentinel_core::{normalize, AlertBoard, NormalizedAlert, Normalizer, RawAlertRecord};

/// Fixed base instant all builder timestamps are relative to.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

/// `base_time()` plus `minutes`.
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    base_time() + chrono::TimeDelta::minutes(minutes)
}

/// Midday UTC on 2024-01-`day`.
pub fn on_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// RawAlertBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawAlertRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawAlertBuilder::new("a1")
///     .message("❌ Resumo do Erro\nTimeout")
///     .workflow("Billing")
///     .status("pendente")
///     .build();
/// ```
pub struct RawAlertBuilder {
    record: RawAlertRecord,
}

impl RawAlertBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            record: RawAlertRecord::new(id, base_time()),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.record.message = Some(message.into());
        self
    }

    pub fn workflow(mut self, name: impl Into<String>) -> Self {
        self.record.workflow_name = Some(name.into());
        self
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.record.node = Some(node.into());
        self
    }

    pub fn error_type(mut self, error_type: impl Into<String>) -> Self {
        self.record.error_type = Some(error_type.into());
        self
    }

    pub fn severity(mut self, label: impl Into<String>) -> Self {
        self.record.severity = Some(label.into());
        self
    }

    pub fn status(mut self, label: impl Into<String>) -> Self {
        self.record.status = Some(label.into());
        self
    }

    pub fn priority(mut self, label: impl Into<String>) -> Self {
        self.record.priority = Some(label.into());
        self
    }

    pub fn execution_id(mut self, id: impl Into<String>) -> Self {
        self.record.execution_id = Some(id.into());
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.record.direct_link = Some(url.into());
        self
    }

    pub fn ts(mut self, ts: DateTime<Utc>) -> Self {
        self.record.timestamp = ts;
        self
    }

    pub fn minute(self, minutes: i64) -> Self {
        self.ts(at_minute(minutes))
    }

    pub fn build(self) -> RawAlertRecord {
        self.record
    }

    pub fn normalized(self) -> NormalizedAlert {
        normalize(&self.record)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A record carrying only a message.
pub fn raw_with_message(id: &str, message: &str) -> RawAlertRecord {
    RawAlertBuilder::new(id).message(message).build()
}

/// Board built from `records` with default placeholders.
pub fn board_of(records: &[RawAlertRecord]) -> AlertBoard {
    AlertBoard::from_records(Normalizer::default(), records)
}

/// `n` records one minute apart, cycling through three workflows and
/// statuses. Record `i` has id `alert-{i}`.
pub fn build_corpus(n: usize) -> Vec<RawAlertRecord> {
    const WORKFLOWS: [&str; 3] = ["Billing sync", "CRM import", "Nightly report"];
    const STATUSES: [&str; 3] = ["pendente", "lido", "resolvido"];
    const PRIORITIES: [&str; 4] = ["Crítica", "Alta", "Média", "Baixa"];

    (0..n)
        .map(|i| {
            RawAlertBuilder::new(format!("alert-{i}"))
                .message(format!(
                    "🛑 Failing node: Node{}\nError type: E{}\nExecution ID: {}",
                    i % 4,
                    i % 2,
                    1000 + i
                ))
                .workflow(WORKFLOWS[i % 3])
                .status(STATUSES[i % 3])
                .priority(PRIORITIES[i % 4])
                .minute(i as i64)
                .build()
        })
        .collect()
}

pub fn ids(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}
