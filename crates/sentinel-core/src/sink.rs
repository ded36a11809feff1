//! Mutation sink — the backend that persists triage decisions.
//!
//! The core never talks to the backend directly. The [`AlertBoard`] calls a
//! sink with the ids of the alerts to change; grouped views pass every id in
//! the group.
//!
//! [`AlertBoard`]: crate::store::AlertBoard

use crate::error::SinkError;
use crate::types::AlertStatus;

pub trait MutationSink {
    /// Set `status` on every alert in `ids`.
    fn set_status(&mut self, ids: &[String], status: AlertStatus) -> Result<(), SinkError>;

    /// Permanently delete every alert in `ids`.
    fn delete(&mut self, ids: &[String]) -> Result<(), SinkError>;
}

impl<S: MutationSink + ?Sized> MutationSink for &mut S {
    fn set_status(&mut self, ids: &[String], status: AlertStatus) -> Result<(), SinkError> {
        (**self).set_status(ids, status)
    }

    fn delete(&mut self, ids: &[String]) -> Result<(), SinkError> {
        (**self).delete(ids)
    }
}
