//! Selection, filtering and chart projection
//!
//! A [`Selection`] names one country and an inclusive date range. The
//! [`filter`] function derives a [`FilteredView`] borrowing the matching
//! dataset records, and [`project`] turns that view into the
//! [`SeriesPair`] the dashboard charts plot.
//!
//! # Example
//!
//! ```no_run
//! use covidash::dataset::Dataset;
//! use covidash::view::{filter, project, Selection};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::load_csv("owid-covid-data.csv")?;
//! let selection = Selection::new(
//!     "Afghanistan",
//!     NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 3, 31).unwrap(),
//! );
//!
//! let view = filter(&dataset, &selection);
//! let series = project(&view);
//! println!("{} days plotted", series.len());
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod project;
pub mod selection;

pub use filter::{filter, FilteredView};
pub use project::{
    project, Series, SeriesPair, SeriesPoint, NEW_CASES_SERIES, TOTAL_CASES_SERIES,
};
pub use selection::Selection;
