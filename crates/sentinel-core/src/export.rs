//! Export — CSV and JSON renderings of an alert list.

use crate::error::ExportError;
use crate::normalizer::NormalizedAlert;
use crate::types::UnknownLabel;
use chrono::NaiveDate;
use std::io::Write;

pub const CSV_HEADER: [&str; 6] = ["ID", "Workflow", "Message", "Status", "Priority", "Date"];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(UnknownLabel {
                kind: "export format",
                label: s.to_string(),
            }),
        }
    }
}

/// `<prefix>_<YYYY-MM-DD>.<ext>`
pub fn export_filename(prefix: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!("{prefix}_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Write one CSV row per alert under [`CSV_HEADER`]. Fields are quoted only
/// when they need to be.
pub fn write_csv<'a, W, I>(writer: W, alerts: I) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a NormalizedAlert>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;

    let mut rows = 0usize;
    for alert in alerts {
        let date = alert.timestamp.format(DATE_FORMAT).to_string();
        out.write_record([
            alert.id.as_str(),
            alert.workflow_name.as_str(),
            alert.message.as_str(),
            alert.status.as_str(),
            alert.priority.as_str(),
            date.as_str(),
        ])?;
        rows += 1;
    }

    out.flush()?;
    tracing::debug!(rows, "export: csv written");
    Ok(())
}

pub fn to_csv<'a, I>(alerts: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a NormalizedAlert>,
{
    let mut buf = Vec::new();
    write_csv(&mut buf, alerts)?;
    String::from_utf8(buf).map_err(|e| ExportError::Io(std::io::Error::other(e)))
}

/// Pretty-printed JSON array of the normalized alerts.
pub fn write_json<W: Write>(writer: W, alerts: &[&NormalizedAlert]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, alerts)?;
    tracing::debug!(rows = alerts.len(), "export: json written");
    Ok(())
}

pub fn to_json(alerts: &[&NormalizedAlert]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(alerts)?)
}

/// Render `alerts` in `format`.
pub fn render(format: ExportFormat, alerts: &[&NormalizedAlert]) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => to_csv(alerts.iter().copied()),
        ExportFormat::Json => to_json(alerts),
    }
}
