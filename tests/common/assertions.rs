//! Domain-specific assertion macros for sentinel harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* field of *which* message broke.

use sentinel_core::{Field, ParsedFields};

// ---------------------------------------------------------------------------
// Parsed field assertions
// ---------------------------------------------------------------------------

/// Assert that a parsed field is present with an expected value.
///
/// ```rust
/// assert_parsed!(fields, Field::ExecutionId, "17914");
/// ```
#[macro_export]
macro_rules! assert_parsed {
    ($fields:expr, $field:expr, $value:expr) => {{
        let fields: &sentinel_core::ParsedFields = &$fields;
        let field: sentinel_core::Field = $field;
        let expected: &str = $value;
        match fields.get(field) {
            Some(actual) => pretty_assertions::assert_eq!(
                actual,
                expected,
                "assert_parsed! failed for {}",
                field.name()
            ),
            None => panic!(
                "assert_parsed! failed: {} is absent.\n  expected: {:?}\n  found: {:?}",
                field.name(),
                expected,
                fields.found().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a parsed field is absent (not merely empty).
#[macro_export]
macro_rules! assert_absent {
    ($fields:expr, $field:expr) => {{
        let fields: &sentinel_core::ParsedFields = &$fields;
        let field: sentinel_core::Field = $field;
        if let Some(actual) = fields.get(field) {
            panic!(
                "assert_absent! failed: {} should be absent, got {:?}",
                field.name(),
                actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Normalized alert assertions
// ---------------------------------------------------------------------------

/// Assert the value and origin of a resolved display field.
///
/// ```rust
/// assert_resolved!(alert.node, "Webhook", Origin::Message);
/// ```
#[macro_export]
macro_rules! assert_resolved {
    ($resolved:expr, $value:expr, $origin:expr) => {{
        let resolved: &sentinel_core::Resolved = &$resolved;
        let expected_value: &str = $value;
        let expected_origin: sentinel_core::Origin = $origin;
        if resolved.value != expected_value || resolved.origin != expected_origin {
            panic!(
                "assert_resolved! failed:\n  expected: {:?} from {:?}\n  actual:   {:?} from {:?}",
                expected_value, expected_origin, resolved.value, resolved.origin
            );
        }
    }};
}

/// Assert the exact id order of a list of alerts.
///
/// ```rust
/// assert_ids!(board.alerts(), ["new", "old"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($alerts:expr, [$($id:expr),* $(,)?]) => {{
        let alerts = $alerts;
        let actual: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_ids! failed");
    }};
}

// ---------------------------------------------------------------------------
// Parser invariant helpers
// ---------------------------------------------------------------------------

/// Every present field must be trimmed and non-empty; single-line fields must
/// not contain a newline.
pub fn assert_well_formed(fields: &ParsedFields) {
    for (field, value) in fields.found() {
        assert!(!value.is_empty(), "{} is present but empty", field.name());
        assert_eq!(value, value.trim(), "{} is not trimmed", field.name());
        if !field.is_section() {
            assert!(
                !value.contains('\n'),
                "{} crosses a line: {value:?}",
                field.name()
            );
        }
    }
}

/// Assert that nothing at all was extracted.
pub fn assert_nothing_found(fields: &ParsedFields, input: &str) {
    let found: Vec<(Field, &str)> = fields.found().collect();
    assert!(found.is_empty(), "expected no fields from {input:?}, got {found:?}");
}
