//! # Covidash
//!
//! Covid Cases by Country - The data core for an interactive pandemic
//! dashboard: load a per-country case table once, then answer country and
//! date-range selections with ready-to-plot chart series.
//!
//! ## Features
//!
//! - **One-shot loading**: CSV parsed and validated once at startup
//! - **Immutable dataset**: sorted records, distinct countries, date bounds
//! - **Pure selections**: filter by country and inclusive date range
//! - **Chart-ready output**: parallel new-cases and total-cases series
//! - **Honest gaps**: missing measurements stay missing, never become zero
//!
//! ## Modules
//!
//! - [`dataset`]: Case table types and the CSV loader
//! - [`view`]: Selection, filtering and series projection
//! - [`dashboard`]: The facade an embedding UI talks to
//! - [`config`]: TOML config with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covidash::Dashboard;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the case table once at startup
//!     let dashboard = Dashboard::from_csv("owid-covid-data.csv")?;
//!
//!     // Populate the UI controls
//!     println!("{} countries", dashboard.list_entities().len());
//!     if let Some(bounds) = dashboard.date_bounds() {
//!         println!("data spans {} to {}", bounds.min, bounds.max);
//!     }
//!
//!     // React to the initial selection
//!     if let Some(selection) = dashboard.default_selection() {
//!         let series = dashboard.on_selection_change(&selection);
//!         println!("{}: {} days plotted", selection.country, series.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod view;

// Re-export top-level types for convenience
pub use dataset::{CaseRecord, Dataset, DateBounds, LoadError, LoadResult};

pub use view::{
    filter, project, FilteredView, Selection, Series, SeriesPair, SeriesPoint, NEW_CASES_SERIES,
    TOTAL_CASES_SERIES,
};

pub use dashboard::{ChartFigure, ChartKind, ChartTrace, Dashboard, FigurePair};

pub use config::{
    generate_default_config, init_logging, Config, ConfigError, DashboardConfig, DataConfig,
    LoggingConfig,
};
