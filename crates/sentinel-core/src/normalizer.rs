//! Normalizer — merges a [`RawAlertRecord`] with what the parser found in its
//! message and produces the [`NormalizedAlert`] every other layer consumes.
//!
//! Resolution runs independently per field: an explicit, non-blank value on
//! the record wins; otherwise the parsed value is used; otherwise a
//! placeholder. Every resolved value remembers where it came from so the
//! presentation layer can render "unknown" differently from real data.

use crate::parser::{self, ParsedFields};
use crate::types::{AlertStatus, RawAlertRecord, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Resolved display values
// ---------------------------------------------------------------------------

/// Where a display value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Explicit field on the raw record.
    Record,
    /// Extracted from the free-text message.
    Message,
    /// Nothing known; the configured placeholder.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resolved {
    pub value: String,
    pub origin: Origin,
}

impl Resolved {
    /// Apply the record → message → placeholder precedence.
    pub fn resolve(explicit: Option<&str>, parsed: Option<&str>, placeholder: &str) -> Self {
        if let Some(value) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
            return Self {
                value: value.to_string(),
                origin: Origin::Record,
            };
        }
        if let Some(value) = parsed {
            return Self {
                value: value.to_string(),
                origin: Origin::Message,
            };
        }
        Self::placeholder(placeholder)
    }

    pub fn placeholder(text: &str) -> Self {
        Self {
            value: text.to_string(),
            origin: Origin::Placeholder,
        }
    }

    /// False when the value is only a placeholder.
    pub fn is_known(&self) -> bool {
        self.origin != Origin::Placeholder
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The value, or `None` if it is a placeholder.
    pub fn known(&self) -> Option<&str> {
        self.is_known().then_some(self.value.as_str())
    }
}

impl std::fmt::Display for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

/// Placeholder text used when neither the record nor the message supplies a
/// value. Loaded from the `[placeholders]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Placeholders {
    #[serde(default = "default_workflow")]
    pub workflow: String,
    #[serde(default = "default_node")]
    pub node: String,
    #[serde(default = "default_error_type")]
    pub error_type: String,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_execution_id")]
    pub execution_id: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default = "default_suggestion")]
    pub suggestion: String,
    #[serde(default = "default_cause")]
    pub cause: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub priority: Severity,
}

fn default_workflow() -> String { "Unknown workflow".to_string() }
fn default_node() -> String { "Unknown node".to_string() }
fn default_error_type() -> String { "Unknown error".to_string() }
fn default_message() -> String { "No message".to_string() }
fn default_execution_id() -> String { "N/A".to_string() }
fn default_link() -> String { "No link".to_string() }
fn default_suggestion() -> String { "No suggestion".to_string() }
fn default_cause() -> String { "Unknown cause".to_string() }

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            workflow: default_workflow(),
            node: default_node(),
            error_type: default_error_type(),
            message: default_message(),
            execution_id: default_execution_id(),
            link: default_link(),
            suggestion: default_suggestion(),
            cause: default_cause(),
            severity: Severity::default(),
            priority: Severity::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// NormalizedAlert
// ---------------------------------------------------------------------------

/// Detail view: single-line diagnostics plus the narrative sections verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDetails {
    pub error_message: Resolved,
    pub possible_cause: Resolved,
    pub suggestion: Resolved,
    pub error_summary: Option<String>,
    pub recommendation: Option<String>,
    pub dev_tip: Option<String>,
}

/// The alert as the rest of the system sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAlert {
    pub id: String,
    pub message: Resolved,
    pub workflow_name: Resolved,
    pub workflow_id: Option<String>,
    pub node: Resolved,
    pub error_type: Resolved,
    pub severity: Severity,
    pub status: AlertStatus,
    pub priority: Severity,
    pub execution_id: Resolved,
    pub direct_link: Resolved,
    pub timestamp: DateTime<Utc>,
    pub details: AlertDetails,
}

impl NormalizedAlert {
    /// The error-summary section, or `"<error type>: <error message>"` when
    /// the message had none.
    pub fn error_summary(&self) -> Cow<'_, str> {
        match &self.details.error_summary {
            Some(summary) => Cow::Borrowed(summary),
            None => Cow::Owned(format!(
                "{}: {}",
                self.error_type, self.details.error_message
            )),
        }
    }

    /// The recommendation section, falling back to the single-line suggestion.
    pub fn recommendation(&self) -> Option<&str> {
        self.details
            .recommendation
            .as_deref()
            .or_else(|| self.details.suggestion.known())
    }

    /// First line of the message, cut to `width` characters. `...` is
    /// appended whenever the whole message is longer than `width`.
    pub fn summary(&self, width: usize) -> String {
        let message = self.message.as_str();
        let first_line = message.lines().next().unwrap_or_default();
        let mut out: String = first_line.chars().take(width).collect();
        if message.chars().count() > width {
            out.push_str("...");
        }
        out
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    placeholders: Placeholders,
}

impl Normalizer {
    pub fn new(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Build the normalized view of `raw`. Never fails and never touches `raw`.
    pub fn normalize(&self, raw: &RawAlertRecord) -> NormalizedAlert {
        let p = &self.placeholders;
        let parsed = parser::parse(raw.message.as_deref().unwrap_or_default());

        let message = match raw.message.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(m) => Resolved {
                value: m.to_string(),
                origin: Origin::Record,
            },
            None => Resolved::placeholder(&p.message),
        };

        NormalizedAlert {
            id: raw.id.clone(),
            message,
            workflow_name: Resolved::resolve(
                raw.workflow_name.as_deref(),
                parsed.workflow_name.as_deref(),
                &p.workflow,
            ),
            workflow_id: raw
                .workflow_id
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            node: Resolved::resolve(raw.node.as_deref(), parsed.failing_node.as_deref(), &p.node),
            error_type: Resolved::resolve(
                raw.error_type.as_deref(),
                parsed.error_type.as_deref(),
                &p.error_type,
            ),
            severity: level_or(&raw.id, "severity", raw.severity.as_deref(), p.severity),
            status: status_or_new(&raw.id, raw.status.as_deref()),
            priority: level_or(&raw.id, "priority", raw.priority.as_deref(), p.priority),
            execution_id: Resolved::resolve(
                raw.execution_id.as_deref(),
                parsed.execution_id.as_deref(),
                &p.execution_id,
            ),
            direct_link: Resolved::resolve(
                raw.direct_link.as_deref(),
                parsed.direct_link.as_deref(),
                &p.link,
            ),
            timestamp: raw.timestamp,
            details: details(raw, parsed, p),
        }
    }
}

/// Normalize with the built-in placeholders.
pub fn normalize(raw: &RawAlertRecord) -> NormalizedAlert {
    Normalizer::default().normalize(raw)
}

fn details(raw: &RawAlertRecord, parsed: ParsedFields, p: &Placeholders) -> AlertDetails {
    // No explicit column for this one: the whole raw message stands in for a
    // missing error-message line.
    let error_message = match parsed.error_message.as_deref() {
        Some(found) => Resolved::resolve(None, Some(found), &p.message),
        None => Resolved::resolve(raw.message.as_deref(), None, &p.message),
    };
    AlertDetails {
        error_message,
        possible_cause: Resolved::resolve(
            raw.possible_cause.as_deref(),
            parsed.possible_cause.as_deref(),
            &p.cause,
        ),
        suggestion: Resolved::resolve(
            raw.suggestion.as_deref(),
            parsed.suggestion.as_deref(),
            &p.suggestion,
        ),
        error_summary: parsed.error_summary,
        recommendation: parsed.recommendation,
        dev_tip: parsed.dev_tip,
    }
}

fn level_or(id: &str, field: &'static str, label: Option<&str>, default: Severity) -> Severity {
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        None => default,
        Some(label) => Severity::parse(label).unwrap_or_else(|| {
            tracing::debug!(alert = %id, field, label, "unrecognised level label, using default");
            default
        }),
    }
}

fn status_or_new(id: &str, label: Option<&str>) -> AlertStatus {
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        None => AlertStatus::New,
        Some(label) => AlertStatus::parse(label).unwrap_or_else(|| {
            tracing::debug!(alert = %id, label, "unrecognised status label, treating as new");
            AlertStatus::New
        }),
    }
}
