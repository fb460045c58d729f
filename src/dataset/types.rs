//! Core data types for the covidash dataset store
//!
//! This module defines the fundamental types of the dashboard core:
//! - `CaseRecord`: one country's reported numbers for one day
//! - `Dataset`: the full, immutable case table
//! - `DateBounds`: the global date span of a dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of the case table
///
/// Represents one country's reported numbers for one calendar date.
/// Counts are `None` when the source left the cell empty; a missing value
/// is never coerced to zero so that charts can render it as a gap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseRecord {
    /// Country name as reported by the source (e.g., "Afghanistan")
    pub country: String,
    /// Calendar date of the observation (the source has no time-of-day)
    pub date: NaiveDate,
    /// Cases newly reported on this date
    #[serde(default)]
    pub new_cases: Option<u64>,
    /// Cumulative cases up to and including this date
    #[serde(default)]
    pub total_cases: Option<u64>,
}

impl CaseRecord {
    /// Create a record; counts accept either a plain number or `None`
    pub fn new(
        country: impl Into<String>,
        date: NaiveDate,
        new_cases: impl Into<Option<u64>>,
        total_cases: impl Into<Option<u64>>,
    ) -> Self {
        Self {
            country: country.into(),
            date,
            new_cases: new_cases.into(),
            total_cases: total_cases.into(),
        }
    }
}

/// Global date span of a dataset (inclusive on both ends)
///
/// Used to constrain the UI's date-range picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest date across all records
    pub min: NaiveDate,
    /// Latest date across all records
    pub max: NaiveDate,
}

impl DateBounds {
    /// Create bounds from the earliest and latest dates
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Check if a date falls within these bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

/// The full case table, immutable once built
///
/// Records are sorted by (country, date ascending) at construction; the
/// distinct country list and the global date bounds are derived once and
/// reused for every selection. Nothing mutates a `Dataset` after it is
/// built, so it can be shared freely by the embedding application.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CaseRecord>,
    countries: Vec<String>,
    bounds: Option<DateBounds>,
}

impl Dataset {
    /// Build a dataset from records in any order
    ///
    /// Sorts by (country, date); the sort is stable, so duplicate
    /// (country, date) pairs keep their source order.
    pub fn from_records(mut records: Vec<CaseRecord>) -> Self {
        records.sort_by(|a, b| a.country.cmp(&b.country).then(a.date.cmp(&b.date)));

        // Sorted by country first, so consecutive dedup yields the
        // lexicographically ordered distinct list.
        let mut countries: Vec<String> =
            records.iter().map(|record| record.country.clone()).collect();
        countries.dedup();

        let bounds = match (
            records.iter().map(|record| record.date).min(),
            records.iter().map(|record| record.date).max(),
        ) {
            (Some(min), Some(max)) => Some(DateBounds::new(min, max)),
            _ => None,
        };

        Self {
            records,
            countries,
            bounds,
        }
    }

    /// All records, sorted by (country, date)
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Distinct country names, lexicographically sorted
    ///
    /// Drives the UI's country dropdown.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Earliest and latest date across all records
    ///
    /// `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<DateBounds> {
        self.bounds
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_creation() {
        let record = CaseRecord::new("Afghanistan", date(2020, 1, 1), 5, 12);
        assert_eq!(record.country, "Afghanistan");
        assert_eq!(record.new_cases, Some(5));
        assert_eq!(record.total_cases, Some(12));

        let gap = CaseRecord::new("India", date(2020, 1, 1), None, Some(10));
        assert_eq!(gap.new_cases, None);
    }

    #[test]
    fn test_record_serialization() {
        let record = CaseRecord::new("India", date(2020, 3, 15), 42, 1000);
        let json = serde_json::to_string(&record).unwrap();
        let restored: CaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }

    #[test]
    fn test_dataset_sorts_records() {
        let dataset = Dataset::from_records(vec![
            CaseRecord::new("India", date(2020, 1, 1), 10, 10),
            CaseRecord::new("Afghanistan", date(2020, 1, 2), 5, 5),
            CaseRecord::new("Afghanistan", date(2020, 1, 1), 0, 0),
        ]);

        let order: Vec<(&str, NaiveDate)> = dataset
            .records()
            .iter()
            .map(|record| (record.country.as_str(), record.date))
            .collect();

        assert_eq!(
            order,
            vec![
                ("Afghanistan", date(2020, 1, 1)),
                ("Afghanistan", date(2020, 1, 2)),
                ("India", date(2020, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_dataset_distinct_countries() {
        let dataset = Dataset::from_records(vec![
            CaseRecord::new("India", date(2020, 1, 1), 10, 10),
            CaseRecord::new("Afghanistan", date(2020, 1, 1), 0, 0),
            CaseRecord::new("India", date(2020, 1, 2), 12, 22),
            CaseRecord::new("Brazil", date(2020, 1, 1), 3, 3),
        ]);

        assert_eq!(dataset.countries(), &["Afghanistan", "Brazil", "India"]);
    }

    #[test]
    fn test_date_bounds() {
        let dataset = Dataset::from_records(vec![
            CaseRecord::new("India", date(2020, 2, 10), 10, 10),
            CaseRecord::new("Afghanistan", date(2020, 1, 3), 0, 0),
            CaseRecord::new("Brazil", date(2020, 3, 1), 3, 3),
        ]);

        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.min, date(2020, 1, 3));
        assert_eq!(bounds.max, date(2020, 3, 1));
    }

    #[test]
    fn test_date_bounds_empty_dataset() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.date_bounds().is_none());
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.countries().is_empty());
    }

    #[test]
    fn test_date_bounds_contains() {
        let bounds = DateBounds::new(date(2020, 1, 1), date(2020, 1, 31));

        assert!(bounds.contains(date(2020, 1, 1)));
        assert!(bounds.contains(date(2020, 1, 15)));
        assert!(bounds.contains(date(2020, 1, 31)));
        assert!(!bounds.contains(date(2019, 12, 31)));
        assert!(!bounds.contains(date(2020, 2, 1)));
    }
}
