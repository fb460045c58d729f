//! Dashboard selection
//!
//! The single piece of interactive state: which country and which date
//! range the user is looking at. The UI restricts choices to known
//! countries and the dataset's date bounds, so the selection itself
//! performs no validation; an inverted range simply matches nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::CaseRecord;

/// One country and an inclusive date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    /// Country to plot
    pub country: String,
    /// First date of the range (inclusive)
    pub start: NaiveDate,
    /// Last date of the range (inclusive)
    pub end: NaiveDate,
}

impl Selection {
    /// Create a selection
    pub fn new(country: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            country: country.into(),
            start,
            end,
        }
    }

    /// Check if a record belongs to this selection
    ///
    /// Country equality plus inclusive containment on both range ends.
    pub fn matches(&self, record: &CaseRecord) -> bool {
        record.country == self.country && record.date >= self.start && record.date <= self.end
    }
}
