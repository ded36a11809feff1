//! Grouping — collapse repeated failures of the same workflow step.
//!
//! Alerts are grouped by (workflow name, node, error code) where the error
//! code is the resolved error type. Each group keeps every underlying id so a
//! triage action on the group can be passed straight to a
//! [`MutationSink`](crate::sink::MutationSink).

use crate::normalizer::NormalizedAlert;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupKey {
    pub workflow_name: String,
    pub node: String,
    pub error_code: String,
}

impl GroupKey {
    pub fn of(alert: &NormalizedAlert) -> Self {
        Self {
            workflow_name: alert.workflow_name.value.clone(),
            node: alert.node.value.clone(),
            error_code: alert.error_type.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertGroup {
    pub key: GroupKey,
    /// Ids of every alert in the group, in input order.
    pub ids: Vec<String>,
    pub unresolved: usize,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// The most recent alert in the group.
    pub representative: NormalizedAlert,
}

impl AlertGroup {
    fn start(key: GroupKey, alert: &NormalizedAlert) -> Self {
        Self {
            key,
            ids: vec![alert.id.clone()],
            unresolved: usize::from(!alert.is_resolved()),
            first_seen: alert.timestamp,
            last_seen: alert.timestamp,
            representative: alert.clone(),
        }
    }

    fn add(&mut self, alert: &NormalizedAlert) {
        self.ids.push(alert.id.clone());
        self.unresolved += usize::from(!alert.is_resolved());
        self.first_seen = self.first_seen.min(alert.timestamp);
        if alert.timestamp > self.last_seen {
            self.last_seen = alert.timestamp;
            self.representative = alert.clone();
        }
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_resolved(&self) -> bool {
        self.unresolved == 0
    }
}

/// Group alerts, newest group first. Groups with the same `last_seen` are
/// ordered by key.
pub fn group_alerts<'a, I>(alerts: I) -> Vec<AlertGroup>
where
    I: IntoIterator<Item = &'a NormalizedAlert>,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<AlertGroup> = Vec::new();

    for alert in alerts {
        let key = GroupKey::of(alert);
        match index.get(&key) {
            Some(&idx) => groups[idx].add(alert),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AlertGroup::start(key, alert));
            }
        }
    }

    groups.sort_by(|a, b| b.last_seen.cmp(&a.last_seen).then_with(|| a.key.cmp(&b.key)));
    tracing::debug!(groups = groups.len(), "grouped alerts");
    groups
}
