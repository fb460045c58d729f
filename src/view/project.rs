//! Chart series projection
//!
//! Projects a filtered view into the two parallel series the dashboard
//! plots. Both series share the filtered view's dates axis; missing
//! measurements stay `None` so renderers can show gaps instead of
//! fabricated zeros.

use chrono::NaiveDate;
use serde::Serialize;

use crate::view::filter::FilteredView;

/// Series name for the daily new cases chart
pub const NEW_CASES_SERIES: &str = "new_cases";

/// Series name for the cumulative total cases chart
pub const TOTAL_CASES_SERIES: &str = "total_cases";

/// One plotted point: a date paired with an optional measurement
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SeriesPoint {
    /// The date on the x axis
    pub date: NaiveDate,
    /// The measured value, `None` where the source had no measurement
    pub value: Option<u64>,
}

impl SeriesPoint {
    /// Create a point
    pub fn new(date: NaiveDate, value: impl Into<Option<u64>>) -> Self {
        Self {
            date,
            value: value.into(),
        }
    }
}

/// A named, date-ascending sequence of points for one chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Series {
    /// Identifies which measurement this series carries
    pub name: String,
    /// Points in the filtered view's order
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Create an empty named series
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The two series projected from one filtered view
///
/// Both series always have the same length and the same date at each
/// index, since each comes from the same pass over the view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeriesPair {
    /// Daily new cases
    pub new_cases: Series,
    /// Cumulative total cases
    pub total_cases: Series,
}

impl SeriesPair {
    /// Number of points in each series
    pub fn len(&self) -> usize {
        self.new_cases.len()
    }

    /// Check if both series are empty
    pub fn is_empty(&self) -> bool {
        self.new_cases.is_empty()
    }
}

/// Project a filtered view into its new-cases and total-cases series
///
/// One pass, no aggregation and no reordering. Every record in the view
/// contributes exactly one point to each series, so an empty view yields
/// two empty series.
pub fn project(view: &FilteredView<'_>) -> SeriesPair {
    let mut new_cases = Series::new(NEW_CASES_SERIES);
    let mut total_cases = Series::new(TOTAL_CASES_SERIES);

    for record in view.iter() {
        new_cases
            .points
            .push(SeriesPoint::new(record.date, record.new_cases));
        total_cases
            .points
            .push(SeriesPoint::new(record.date, record.total_cases));
    }

    SeriesPair {
        new_cases,
        total_cases,
    }
}
