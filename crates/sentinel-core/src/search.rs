//! Search layer — filtering and pagination over normalized alerts.
//!
//! Every filter dimension is optional and they combine with AND. The search
//! term is a case-insensitive substring match against the raw message and the
//! resolved workflow name.

use crate::normalizer::NormalizedAlert;
use crate::types::{AlertStatus, Severity};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Longest search term kept after sanitizing, in characters.
pub const DEFAULT_SEARCH_TERM_MAX_LEN: usize = 100;

/// Trim the term and cap its length. Returns `None` when nothing is left.
pub fn sanitize_search_term(term: &str, max_len: usize) -> Option<String> {
    let capped: String = term.trim().chars().take(max_len).collect();
    let capped = capped.trim_end();
    (!capped.is_empty()).then(|| capped.to_string())
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Inclusive range of whole UTC days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `start` at 00:00:00.000 UTC.
    pub fn lower_bound(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// `end` at 23:59:59.999 UTC.
    pub fn upper_bound(&self) -> DateTime<Utc> {
        (self.end.and_time(NaiveTime::MIN) + TimeDelta::days(1) - TimeDelta::milliseconds(1))
            .and_utc()
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.lower_bound() && ts <= self.upper_bound()
    }
}

// ---------------------------------------------------------------------------
// AlertFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    search_term: Option<String>,
    pub status: Option<AlertStatus>,
    pub priority: Option<Severity>,
    pub date_range: Option<DateRange>,
}

impl AlertFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term, sanitized with the default length cap.
    pub fn search(self, term: &str) -> Self {
        self.search_capped(term, DEFAULT_SEARCH_TERM_MAX_LEN)
    }

    pub fn search_capped(mut self, term: &str, max_len: usize) -> Self {
        self.search_term = sanitize_search_term(term, max_len).map(|t| t.to_lowercase());
        self
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Severity) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// The sanitized, lowercased search term.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, alert: &NormalizedAlert) -> bool {
        if let Some(status) = self.status {
            if alert.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if alert.priority != priority {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.contains(alert.timestamp) {
                return false;
            }
        }
        if let Some(term) = &self.search_term {
            let in_message =
                alert.message.is_known() && alert.message.as_str().to_lowercase().contains(term);
            let in_workflow = alert.workflow_name.as_str().to_lowercase().contains(term);
            if !in_message && !in_workflow {
                return false;
            }
        }
        true
    }

    pub fn apply<'a, I>(&self, alerts: I) -> Vec<&'a NormalizedAlert>
    where
        I: IntoIterator<Item = &'a NormalizedAlert>,
    {
        alerts.into_iter().filter(|a| self.matches(a)).collect()
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

pub fn paginate<T>(items: Vec<T>, page: Page) -> PageSlice<T> {
    let page = Page::new(page.number, page.size);
    let total = items.len();
    let pages = total.div_ceil(page.size);
    let from = (page.number - 1).saturating_mul(page.size);
    let items = items.into_iter().skip(from).take(page.size).collect();
    PageSlice {
        items,
        total,
        page: page.number,
        pages,
    }
}
