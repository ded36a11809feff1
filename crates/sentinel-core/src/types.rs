//! Core types for sentinel-core.
//!
//! This module defines the records shared across all layers: the
//! [`RawAlertRecord`] delivered by the ingestion backend, the typed
//! [`AlertStatus`] and [`Severity`] scales, and the [`FeedEvent`] envelope that
//! feeds push onto the board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One alert exactly as the ingestion backend delivers it.
///
/// Every field except `id` and `timestamp` is optional. Explicit fields are
/// authoritative: the normalizer only falls back to values parsed out of
/// `message` when the corresponding field here is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlertRecord {
    pub id: String,
    /// Free-text diagnostic body produced by the upstream generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, alias = "workflow_name", skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(default, alias = "workflow_id", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(default, alias = "error_node_name", skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, alias = "error_name", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, alias = "execution_id", skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
    #[serde(default, alias = "execution_url", skip_serializing_if = "Option::is_none")]
    pub direct_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, alias = "possible_cause", skip_serializing_if = "Option::is_none")]
    pub possible_cause: Option<String>,
    /// When the alert was raised.
    #[serde(alias = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl RawAlertRecord {
    /// A record with only the mandatory fields set.
    pub fn new(id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            message: None,
            workflow_name: None,
            workflow_id: None,
            node: None,
            error_type: None,
            severity: None,
            status: None,
            priority: None,
            execution_id: None,
            direct_link: None,
            suggestion: None,
            possible_cause: None,
            timestamp,
        }
    }
}

/// Error returned when a status or severity label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {kind} label: {label:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Triage state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    New,
    Read,
    Resolved,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 3] = [AlertStatus::New, AlertStatus::Read, AlertStatus::Resolved];

    /// Lenient label parsing. Accepts the English labels plus the Portuguese
    /// labels stored by the dashboard backend.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "new" | "pending" | "pendente" | "novo" => Some(AlertStatus::New),
            "read" | "lido" | "acknowledged" | "in progress" => Some(AlertStatus::Read),
            "resolved" | "resolvido" | "ignored" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::New => "new",
            AlertStatus::Read => "read",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn is_resolved(self) -> bool {
        self == AlertStatus::Resolved
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for AlertStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertStatus::parse(s).ok_or_else(|| UnknownLabel {
            kind: "status",
            label: s.to_string(),
        })
    }
}

/// Severity scale shared by the `severity` and `priority` fields.
///
/// Ordered from least to most urgent so `max()` and sorting do the obvious
/// thing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "critical" | "crítica" | "critica" => Some(Severity::Critical),
            "high" | "alta" => Some(Severity::High),
            "medium" | "média" | "media" => Some(Severity::Medium),
            "low" | "baixa" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s).ok_or_else(|| UnknownLabel {
            kind: "severity",
            label: s.to_string(),
        })
    }
}

/// What an ingestion feed delivers to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// Full ordered listing; replaces everything currently on the board.
    Snapshot(Vec<RawAlertRecord>),
    /// A single newly raised alert.
    Inserted(RawAlertRecord),
    /// The backend dropped the alert with this id.
    Removed(String),
}
