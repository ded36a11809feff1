//! In-memory sink. Keeps the records it was given and every call it received,
//! and can be switched to reject calls to exercise the board's revert path.

use sentinel_core::{AlertStatus, MutationSink, RawAlertRecord, SinkError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    SetStatus(Vec<String>, AlertStatus),
    Delete(Vec<String>),
}

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<RawAlertRecord>,
    calls: Vec<SinkCall>,
    reject: bool,
}

impl MemorySink {
    pub fn new(records: Vec<RawAlertRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// A sink that fails every call with [`SinkError::Rejected`].
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn set_reject(&mut self, reject: bool) {
        self.reject = reject;
    }

    pub fn records(&self) -> &[RawAlertRecord] {
        &self.records
    }

    /// Every call received, rejected ones included.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    fn check(&self) -> Result<(), SinkError> {
        if self.reject {
            return Err(SinkError::Rejected("memory sink set to reject".to_string()));
        }
        Ok(())
    }
}

impl MutationSink for MemorySink {
    fn set_status(&mut self, ids: &[String], status: AlertStatus) -> Result<(), SinkError> {
        self.calls.push(SinkCall::SetStatus(ids.to_vec(), status));
        self.check()?;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.status = Some(status.as_str().to_string());
        }
        Ok(())
    }

    fn delete(&mut self, ids: &[String]) -> Result<(), SinkError> {
        self.calls.push(SinkCall::Delete(ids.to_vec()));
        self.check()?;
        self.records.retain(|r| !ids.contains(&r.id));
        Ok(())
    }
}
