//! Selection filter
//!
//! Derives the ephemeral subsequence of dataset records matching a
//! selection. The result borrows from the dataset, is recomputed on every
//! selection change, and is never stored.

use crate::dataset::{CaseRecord, Dataset};
use crate::view::selection::Selection;

/// The subsequence of dataset records matching one selection
///
/// Order is preserved from the dataset, which is already date-ascending
/// within a country. An empty view is a valid outcome ("nothing to
/// plot"), not a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a CaseRecord>,
}

impl<'a> FilteredView<'a> {
    /// The matching records, in dataset order
    pub fn records(&self) -> &[&'a CaseRecord] {
        &self.records
    }

    /// Iterate the matching records
    pub fn iter(&self) -> impl Iterator<Item = &'a CaseRecord> + '_ {
        self.records.iter().copied()
    }

    /// Number of matching records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select all records for the selection's country dated within its
/// inclusive range, preserving dataset order
///
/// A pure function of its inputs: identical arguments always produce the
/// identical sequence. There are no error conditions; an unknown country,
/// a range outside the data span, or an inverted range all yield an empty
/// view.
pub fn filter<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredView<'a> {
    let records = dataset
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect();

    FilteredView { records }
}
