//! Analytics — triage health figures over a set of normalized alerts.

use crate::normalizer::NormalizedAlert;
use crate::types::Severity;
use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub pending: usize,
    pub resolved: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub total_pending: usize,
    pub total_resolved: usize,
    /// Percentage of alerts resolved, 0.0 when there are none.
    pub resolution_rate: f64,
    pub critical_active: usize,
    /// Unresolved alerts per severity. Every severity is present.
    pub severity_breakdown: BTreeMap<Severity, usize>,
    pub top_workflows: Vec<WorkflowCount>,
    /// Oldest day first, ending at `today`.
    pub timeline: Vec<DayBucket>,
}

/// Summarize `alerts` as of `today` (UTC), with a `days`-long timeline and
/// the `top_n` workflows with the most unresolved alerts.
pub fn summarize<'a, I>(alerts: I, today: NaiveDate, days: usize, top_n: usize) -> AlertStats
where
    I: IntoIterator<Item = &'a NormalizedAlert>,
{
    let mut timeline: Vec<DayBucket> = (0..days)
        .rev()
        .map(|back| DayBucket {
            date: today - TimeDelta::days(back as i64),
            pending: 0,
            resolved: 0,
        })
        .collect();
    let mut severity_breakdown: BTreeMap<Severity, usize> =
        Severity::ALL.into_iter().map(|s| (s, 0)).collect();
    let mut per_workflow: HashMap<&str, usize> = HashMap::new();
    let (mut pending, mut resolved, mut critical) = (0usize, 0usize, 0usize);

    for alert in alerts {
        let day = alert.timestamp.date_naive();
        let bucket = timeline.iter_mut().find(|b| b.date == day);

        if alert.is_resolved() {
            resolved += 1;
            if let Some(b) = bucket {
                b.resolved += 1;
            }
            continue;
        }

        pending += 1;
        if let Some(b) = bucket {
            b.pending += 1;
        }
        *severity_breakdown.entry(alert.severity).or_default() += 1;
        if alert.severity == Severity::Critical {
            critical += 1;
        }
        *per_workflow.entry(alert.workflow_name.as_str()).or_default() += 1;
    }

    let mut top_workflows: Vec<WorkflowCount> = per_workflow
        .into_iter()
        .map(|(name, count)| WorkflowCount {
            name: name.to_string(),
            count,
        })
        .collect();
    top_workflows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    top_workflows.truncate(top_n);

    let total = pending + resolved;
    let resolution_rate = if total == 0 {
        0.0
    } else {
        resolved as f64 * 100.0 / total as f64
    };

    AlertStats {
        total_pending: pending,
        total_resolved: resolved,
        resolution_rate,
        critical_active: critical,
        severity_breakdown,
        top_workflows,
        timeline,
    }
}
