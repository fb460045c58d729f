//! Covidash Dataset Store
//!
//! The immutable in-memory case table and its load path:
//!
//! - **types**: core data structures (CaseRecord, Dataset, DateBounds)
//! - **loader**: OWID-style CSV parsing and validation
//! - **error**: load error taxonomy
//!
//! The table is built once at startup and read-only afterwards; every
//! selection change derives an ephemeral view from it (see [`crate::view`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use covidash::dataset::Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load_csv("owid-covid-data.csv")?;
//!
//!     println!(
//!         "{} records across {} countries",
//!         dataset.len(),
//!         dataset.countries().len()
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use error::{LoadError, LoadResult};
pub use types::{CaseRecord, Dataset, DateBounds};
