//! Store — the in-memory board of [`NormalizedAlert`] values.
//!
//! The board is the single source of truth for the presentation layer. Feeds
//! push [`FeedEvent`]s into it; triage actions go through a
//! [`MutationSink`] and are applied optimistically.
//!
//! Alerts are kept most recent first.

use crate::error::SinkError;
use crate::normalizer::{NormalizedAlert, Normalizer};
use crate::sink::MutationSink;
use crate::types::{AlertStatus, FeedEvent, RawAlertRecord};

#[derive(Debug, Default)]
pub struct AlertBoard {
    alerts: Vec<NormalizedAlert>,
    normalizer: Normalizer,
}

impl AlertBoard {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            alerts: Vec::new(),
            normalizer,
        }
    }

    /// Build a board from a bulk listing.
    pub fn from_records(normalizer: Normalizer, records: &[RawAlertRecord]) -> Self {
        let mut board = Self::new(normalizer);
        board.replace_all(records);
        board
    }

    pub fn alerts(&self) -> &[NormalizedAlert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NormalizedAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.alerts.iter().map(|a| a.id.clone()).collect()
    }

    // -----------------------------------------------------------------------
    // Feed events
    // -----------------------------------------------------------------------

    pub fn apply(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Snapshot(records) => self.replace_all(&records),
            FeedEvent::Inserted(record) => self.push(&record),
            FeedEvent::Removed(id) => {
                self.remove_local(&[id]);
            }
        }
    }

    /// Replace the whole board. Ties on timestamp keep listing order.
    pub fn replace_all(&mut self, records: &[RawAlertRecord]) {
        self.alerts = records.iter().map(|r| self.normalizer.normalize(r)).collect();
        self.alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tracing::debug!(count = self.alerts.len(), "board: snapshot applied");
    }

    /// Put a newly pushed alert at the top. An alert already on the board with
    /// the same id is replaced.
    pub fn push(&mut self, record: &RawAlertRecord) {
        let replaced = self.remove_local(std::slice::from_ref(&record.id));
        self.alerts.insert(0, self.normalizer.normalize(record));
        tracing::debug!(id = %record.id, replaced, "board: alert pushed");
    }

    /// Drop alerts locally without telling the backend. Returns how many were
    /// removed.
    pub fn remove_local(&mut self, ids: &[String]) -> usize {
        let before = self.alerts.len();
        self.alerts.retain(|a| !ids.contains(&a.id));
        before - self.alerts.len()
    }

    // -----------------------------------------------------------------------
    // Triage actions
    // -----------------------------------------------------------------------

    /// Change the status of `ids`. The board is updated before the sink is
    /// called; if the sink fails the previous statuses are restored.
    ///
    /// Returns how many alerts on the board were changed.
    pub fn set_status<S: MutationSink>(
        &mut self,
        mut sink: S,
        ids: &[String],
        status: AlertStatus,
    ) -> Result<usize, SinkError> {
        let previous: Vec<(usize, AlertStatus)> = self
            .alerts
            .iter()
            .enumerate()
            .filter(|(_, a)| ids.contains(&a.id))
            .map(|(idx, a)| (idx, a.status))
            .collect();

        for (idx, _) in &previous {
            self.alerts[*idx].status = status;
        }

        if let Err(err) = sink.set_status(ids, status) {
            tracing::warn!(error = %err, count = previous.len(), "board: status update rejected, reverting");
            for (idx, old) in previous {
                self.alerts[idx].status = old;
            }
            return Err(err);
        }

        tracing::debug!(%status, count = previous.len(), "board: status updated");
        Ok(previous.len())
    }

    pub fn resolve<S: MutationSink>(&mut self, sink: S, ids: &[String]) -> Result<usize, SinkError> {
        self.set_status(sink, ids, AlertStatus::Resolved)
    }

    /// Delete `ids` in the backend, then drop them from the board. Nothing is
    /// removed locally if the sink fails.
    pub fn delete<S: MutationSink>(&mut self, mut sink: S, ids: &[String]) -> Result<usize, SinkError> {
        sink.delete(ids)?;
        let removed = self.remove_local(ids);
        tracing::debug!(removed, "board: alerts deleted");
        Ok(removed)
    }

    /// Delete everything on the board.
    pub fn clear<S: MutationSink>(&mut self, sink: S) -> Result<usize, SinkError> {
        let ids = self.ids();
        if ids.is_empty() {
            return Ok(0);
        }
        self.delete(sink, &ids)
    }
}
