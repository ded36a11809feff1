//! Plain-text rendering of board views for the terminal.
//!
//! Placeholder values are wrapped in angle brackets so an operator never
//! mistakes "unknown" for data that came from the alert.

use sentinel_core::analytics::AlertStats;
use sentinel_core::group::AlertGroup;
use sentinel_core::search::PageSlice;
use sentinel_core::{NormalizedAlert, ParsedFields, Resolved};
use std::fmt::Write;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn shown(value: &Resolved) -> String {
    if value.is_known() {
        value.value.clone()
    } else {
        format!("<{}>", value.value)
    }
}

/// One line per alert: id, status, priority, time, workflow, summary.
pub fn alert_line(alert: &NormalizedAlert, width: usize) -> String {
    format!(
        "{:<12} {:<8} {:<8} {}  {}  {}",
        alert.id,
        alert.status,
        alert.priority,
        alert.timestamp.format(TIME_FORMAT),
        shown(&alert.workflow_name),
        alert.summary(width),
    )
}

pub fn page(slice: &PageSlice<&NormalizedAlert>, width: usize) -> String {
    let mut out = String::new();
    for alert in &slice.items {
        let _ = writeln!(out, "{}", alert_line(alert, width));
    }
    let _ = writeln!(
        out,
        "-- page {}/{} ({} alerts)",
        slice.page,
        slice.pages.max(1),
        slice.total
    );
    out
}

pub fn alert_detail(alert: &NormalizedAlert) -> String {
    let mut out = String::new();
    let d = &alert.details;
    let rows: [(&str, String); 12] = [
        ("id", alert.id.clone()),
        ("workflow", shown(&alert.workflow_name)),
        ("node", shown(&alert.node)),
        ("error type", shown(&alert.error_type)),
        ("error message", shown(&d.error_message)),
        ("severity", alert.severity.to_string()),
        ("priority", alert.priority.to_string()),
        ("status", alert.status.to_string()),
        ("execution", shown(&alert.execution_id)),
        ("link", shown(&alert.direct_link)),
        ("possible cause", shown(&d.possible_cause)),
        ("raised", alert.timestamp.to_rfc3339()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:>15}: {value}");
    }

    let _ = writeln!(out, "\nError summary\n{}", alert.error_summary());
    if let Some(rec) = alert.recommendation() {
        let _ = writeln!(out, "\nRecommended action\n{rec}");
    }
    if let Some(tip) = &d.dev_tip {
        let _ = writeln!(out, "\nDev tip\n{tip}");
    }
    out
}

pub fn groups(groups: &[AlertGroup], width: usize) -> String {
    let mut out = String::new();
    for g in groups {
        let _ = writeln!(
            out,
            "{:>4}x ({} open)  {} / {} / {}  last {}",
            g.count(),
            g.unresolved,
            g.key.workflow_name,
            g.key.node,
            g.key.error_code,
            g.last_seen.format(TIME_FORMAT),
        );
        let _ = writeln!(out, "       {}", g.representative.summary(width));
    }
    out
}

pub fn stats(stats: &AlertStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pending:         {}", stats.total_pending);
    let _ = writeln!(out, "resolved:        {}", stats.total_resolved);
    let _ = writeln!(out, "resolution rate: {:.1}%", stats.resolution_rate);
    let _ = writeln!(out, "critical active: {}", stats.critical_active);

    let _ = writeln!(out, "\nopen by severity");
    for (severity, count) in stats.severity_breakdown.iter().rev() {
        let _ = writeln!(out, "  {severity:<9}{count}");
    }

    let _ = writeln!(out, "\ntop workflows");
    for wf in &stats.top_workflows {
        let _ = writeln!(out, "  {:<4}{}", wf.count, wf.name);
    }

    let _ = writeln!(out, "\ntimeline");
    for day in &stats.timeline {
        let _ = writeln!(out, "  {}  {:>4} open {:>4} resolved", day.date, day.pending, day.resolved);
    }
    out
}

pub fn parsed(fields: &ParsedFields) -> String {
    let mut out = String::new();
    for (field, value) in fields.found() {
        if field.is_section() {
            let _ = writeln!(out, "{}:\n{value}", field.name());
        } else {
            let _ = writeln!(out, "{}: {value}", field.name());
        }
    }
    if out.is_empty() {
        out.push_str("no fields found\n");
    }
    out
}
