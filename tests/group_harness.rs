#![allow(unused)]
//! Grouping and analytics integration harness.
//!
//! # What this covers
//!
//! - **Group key**: alerts group by workflow name, node and error type, using
//!   the resolved values whatever their origin.
//! - **Representative**: the latest alert of a group; the first one in input
//!   order when timestamps tie.
//! - **Ordering**: groups are sorted by last seen, newest first.
//! - **Counts**: total and unresolved per group.
//! - **Analytics**: totals, resolution rate, active critical count, severity
//!   breakdown, top workflows and the daily timeline.
//! - **Property: every id in exactly one group**.
//!
//! # What this does NOT cover
//!
//! - Rendering of groups and stats (see the unit tests of the binary)
//!
//! # Running
//!
//! ```sh
//! cargo test --test group_harness
//! ```

mod common;
use common::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sentinel_core::analytics::{summarize, WorkflowCount};
use sentinel_core::group::{group_alerts, GroupKey};
use sentinel_core::{NormalizedAlert, Severity};
use std::collections::HashSet;

fn failure(id: &str, minute: i64, node: &str, error: &str) -> NormalizedAlert {
    RawAlertBuilder::new(id)
        .workflow("Billing")
        .message(format!("Failing node: {node}\nError type: {error}"))
        .minute(minute)
        .normalized()
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn explicit_and_parsed_values_share_a_key() {
    let parsed = failure("a", 1, "HTTP", "Timeout");
    let explicit = RawAlertBuilder::new("b")
        .workflow("Billing")
        .node("HTTP")
        .error_type("Timeout")
        .minute(2)
        .normalized();
    let groups = group_alerts([&parsed, &explicit]);
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].key,
        GroupKey {
            workflow_name: "Billing".to_string(),
            node: "HTTP".to_string(),
            error_code: "Timeout".to_string(),
        }
    );
}

#[test]
fn different_error_splits_the_group() {
    let alerts = vec![
        failure("a", 1, "HTTP", "Timeout"),
        failure("b", 2, "HTTP", "AuthError"),
        failure("c", 3, "Code", "Timeout"),
    ];
    assert_eq!(group_alerts(&alerts).len(), 3);
}

#[test]
fn groups_are_newest_first_with_latest_representative() {
    let alerts = vec![
        failure("a1", 1, "HTTP", "Timeout"),
        failure("b1", 5, "Code", "TypeError"),
        failure("a2", 9, "HTTP", "Timeout"),
        failure("a3", 3, "HTTP", "Timeout"),
    ];
    let groups = group_alerts(&alerts);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.node, "HTTP");
    assert_eq!(groups[0].representative.id, "a2");
    assert_eq!(groups[0].ids, vec!["a1", "a2", "a3"]);
    assert_eq!(groups[0].first_seen, at_minute(1));
    assert_eq!(groups[0].last_seen, at_minute(9));
    assert_eq!(groups[1].key.node, "Code");
}

#[test]
fn representative_tie_keeps_first_seen() {
    let alerts = vec![
        failure("first", 4, "HTTP", "Timeout"),
        failure("second", 4, "HTTP", "Timeout"),
    ];
    assert_eq!(group_alerts(&alerts)[0].representative.id, "first");
}

#[test]
fn unresolved_count_ignores_resolved_members() {
    let alerts = vec![
        RawAlertBuilder::new("a").status("resolvido").normalized(),
        RawAlertBuilder::new("b").status("lido").normalized(),
        RawAlertBuilder::new("c").normalized(),
    ];
    let groups = group_alerts(&alerts);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count(), 3);
    assert_eq!(groups[0].unresolved, 2);
    assert!(!groups[0].is_resolved());
    assert_eq!(groups[0].key.workflow_name, "Unknown workflow");
}

proptest! {
    #[test]
    fn every_id_lands_in_exactly_one_group(n in 0usize..60) {
        let board = board_of(&build_corpus(n));
        let groups = group_alerts(board.alerts());
        let mut seen = HashSet::new();
        for g in &groups {
            for id in &g.ids {
                prop_assert!(seen.insert(id.clone()), "{} in two groups", id);
            }
        }
        prop_assert_eq!(seen.len(), n);
        prop_assert!(groups.windows(2).all(|w| w[0].last_seen >= w[1].last_seen));
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[test]
fn stats_over_a_mixed_board() {
    let alerts: Vec<NormalizedAlert> = vec![
        RawAlertBuilder::new("1").workflow("Billing").severity("Crítica").status("pendente").ts(on_day(15)),
        RawAlertBuilder::new("2").workflow("Billing").severity("high").status("lido").ts(on_day(15)),
        RawAlertBuilder::new("3").workflow("CRM").severity("critical").status("resolvido").ts(on_day(14)),
        RawAlertBuilder::new("4").workflow("CRM").severity("baixa").ts(on_day(13)),
        RawAlertBuilder::new("5").workflow("Report").ts(on_day(2)),
    ]
    .into_iter()
    .map(RawAlertBuilder::normalized)
    .collect();

    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let stats = summarize(&alerts, today, 7, 2);

    assert_eq!(stats.total_pending, 4);
    assert_eq!(stats.total_resolved, 1);
    assert_eq!(stats.resolution_rate, 20.0);
    assert_eq!(stats.critical_active, 1);
    assert_eq!(stats.severity_breakdown[&Severity::Critical], 1);
    assert_eq!(stats.severity_breakdown[&Severity::High], 1);
    assert_eq!(stats.severity_breakdown[&Severity::Medium], 1);
    assert_eq!(stats.severity_breakdown[&Severity::Low], 1);
    assert_eq!(
        stats.top_workflows,
        vec![
            WorkflowCount { name: "Billing".to_string(), count: 2 },
            WorkflowCount { name: "CRM".to_string(), count: 1 },
        ]
    );

    let days: Vec<(u32, usize, usize)> = stats
        .timeline
        .iter()
        .map(|d| (chrono::Datelike::day(&d.date), d.pending, d.resolved))
        .collect();
    assert_eq!(
        days,
        vec![
            (9, 0, 0),
            (10, 0, 0),
            (11, 0, 0),
            (12, 0, 0),
            (13, 1, 0),
            (14, 0, 1),
            (15, 2, 0),
        ]
    );
}

#[test]
fn stats_serialize_for_the_presentation_layer() {
    let alerts = vec![RawAlertBuilder::new("1").ts(on_day(15)).normalized()];
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let json = serde_json::to_value(summarize(&alerts, today, 1, 5)).unwrap();
    assert_eq!(json["totalPending"], 1);
    assert_eq!(json["severityBreakdown"]["medium"], 1);
    assert_eq!(json["timeline"][0]["date"], "2024-01-15");
}
