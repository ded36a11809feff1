//! Message parser — extracts structured fields from free-text alert bodies.
//!
//! Upstream generators have emitted several formats over time: Portuguese
//! "label: value" lines, English ones, and emoji-headed narrative sections.
//! [`parse`] runs every rule in the rule tables over the text once and keeps what
//! matches. A field that cannot be found is `None`; nothing here can fail.
//!
//! ```
//! use sentinel_core::parser::parse;
//!
//! let fields = parse("🧩 ID da Execução: 17914\n❌ Resumo do Erro\nTimeout após 30s.");
//! assert_eq!(fields.execution_id.as_deref(), Some("17914"));
//! assert_eq!(fields.error_summary.as_deref(), Some("Timeout após 30s."));
//! assert_eq!(fields.direct_link, None);
//! ```

pub(crate) mod rules;

use rules::{ValueShape, COMPILED_LINE_RULES, COMPILED_SECTION_RULES, HEADING_LINE, QUOTES};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Field identifiers
// ---------------------------------------------------------------------------

/// Every field the parser knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ExecutionId,
    DirectLink,
    FailingNode,
    ErrorType,
    ErrorMessage,
    WorkflowName,
    PossibleCause,
    Suggestion,
    ErrorSummary,
    Recommendation,
    DevTip,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::ExecutionId,
        Field::DirectLink,
        Field::FailingNode,
        Field::ErrorType,
        Field::ErrorMessage,
        Field::WorkflowName,
        Field::PossibleCause,
        Field::Suggestion,
        Field::ErrorSummary,
        Field::Recommendation,
        Field::DevTip,
    ];

    /// camelCase name, matching the serialized [`ParsedFields`] keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::ExecutionId => "executionId",
            Field::DirectLink => "directLink",
            Field::FailingNode => "failingNode",
            Field::ErrorType => "errorType",
            Field::ErrorMessage => "errorMessage",
            Field::WorkflowName => "workflowName",
            Field::PossibleCause => "possibleCause",
            Field::Suggestion => "suggestion",
            Field::ErrorSummary => "errorSummary",
            Field::Recommendation => "recommendation",
            Field::DevTip => "devTip",
        }
    }

    /// Whether the field is captured as a multi-line section.
    pub fn is_section(self) -> bool {
        matches!(
            self,
            Field::ErrorSummary | Field::Recommendation | Field::DevTip
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ParsedFields
// ---------------------------------------------------------------------------

/// Result of [`parse`]. Each field is either a trimmed, non-empty string or
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFields {
    pub execution_id: Option<String>,
    pub direct_link: Option<String>,
    pub failing_node: Option<String>,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub workflow_name: Option<String>,
    pub possible_cause: Option<String>,
    pub suggestion: Option<String>,
    pub error_summary: Option<String>,
    pub recommendation: Option<String>,
    pub dev_tip: Option<String>,
}

impl ParsedFields {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.slot(*f).is_none())
    }

    /// Fields that were found, in [`Field::ALL`] order.
    pub fn found(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::ExecutionId => &self.execution_id,
            Field::DirectLink => &self.direct_link,
            Field::FailingNode => &self.failing_node,
            Field::ErrorType => &self.error_type,
            Field::ErrorMessage => &self.error_message,
            Field::WorkflowName => &self.workflow_name,
            Field::PossibleCause => &self.possible_cause,
            Field::Suggestion => &self.suggestion,
            Field::ErrorSummary => &self.error_summary,
            Field::Recommendation => &self.recommendation,
            Field::DevTip => &self.dev_tip,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ExecutionId => &mut self.execution_id,
            Field::DirectLink => &mut self.direct_link,
            Field::FailingNode => &mut self.failing_node,
            Field::ErrorType => &mut self.error_type,
            Field::ErrorMessage => &mut self.error_message,
            Field::WorkflowName => &mut self.workflow_name,
            Field::PossibleCause => &mut self.possible_cause,
            Field::Suggestion => &mut self.suggestion,
            Field::ErrorSummary => &mut self.error_summary,
            Field::Recommendation => &mut self.recommendation,
            Field::DevTip => &mut self.dev_tip,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

/// Extract every recognised field from `message`.
pub fn parse(message: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();
    if message.trim().is_empty() {
        return fields;
    }

    for rule in COMPILED_LINE_RULES.iter() {
        *fields.slot_mut(rule.field) = rule
            .regex
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| clean_value(m.as_str(), rule.shape));
    }

    for rule in COMPILED_SECTION_RULES.iter() {
        *fields.slot_mut(rule.field) = rule
            .regex
            .find(message)
            .and_then(|heading| section_body(message, heading.end()));
    }

    tracing::trace!(
        found = fields.found().count(),
        len = message.len(),
        "parsed alert message"
    );
    fields
}

/// Text from `start` up to the next heading line, or to the end of input.
fn section_body(message: &str, start: usize) -> Option<String> {
    let end = HEADING_LINE
        .find_at(message, start)
        .map_or(message.len(), |m| m.start());
    non_empty(&message[start..end])
}

fn clean_value(raw: &str, shape: ValueShape) -> Option<String> {
    match shape {
        ValueShape::Quoted => non_empty(strip_outer_quotes(raw.trim())),
        ValueShape::Digits | ValueShape::HttpUrl | ValueShape::Text => non_empty(raw),
    }
}

/// Remove at most one quote character from each edge. Interior quotes stay.
fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
