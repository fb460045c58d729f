//! Dashboard Facade
//!
//! The single entry point an embedding UI talks to. A [`Dashboard`] owns
//! the immutable [`Dataset`] plus the presentation config, and answers
//! the three questions a frontend asks:
//!
//! 1. What can be selected? ([`Dashboard::list_entities`],
//!    [`Dashboard::date_bounds`], [`Dashboard::default_selection`])
//! 2. What does a selection plot? ([`Dashboard::on_selection_change`])
//! 3. How is it drawn? ([`Dashboard::figures`])
//!
//! Selections are owned by the caller; the dashboard never stores one.
//! Every call recomputes from the dataset, so repeated calls with the
//! same selection return the same series.

pub mod figures;

pub use figures::{ChartFigure, ChartKind, ChartTrace, FigurePair};

use std::path::Path;

use crate::config::{Config, DashboardConfig};
use crate::dataset::{Dataset, DateBounds, LoadResult};
use crate::view::{filter, project, Selection, SeriesPair};

/// The dashboard data core
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// The loaded case table
    dataset: Dataset,
    /// Title and default-country presentation settings
    config: DashboardConfig,
}

impl Dashboard {
    /// Create a dashboard over a dataset with default presentation config
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, DashboardConfig::default())
    }

    /// Create a dashboard with explicit presentation config
    pub fn with_config(dataset: Dataset, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    /// Load the case table from a CSV file and build a dashboard over it
    pub fn from_csv(path: impl AsRef<Path>) -> LoadResult<Self> {
        Ok(Self::new(Dataset::load_csv(path)?))
    }

    /// Build a dashboard from a full application config
    ///
    /// Loads the CSV named by `[data].source` and applies the
    /// `[dashboard]` presentation settings.
    pub fn from_config(config: &Config) -> LoadResult<Self> {
        let dataset = Dataset::load_csv(&config.data.source)?;
        Ok(Self::with_config(dataset, config.dashboard.clone()))
    }

    /// The dashboard title shown by the embedding UI
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// The underlying dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Country names for the selection dropdown, lexicographically sorted
    pub fn list_entities(&self) -> &[String] {
        self.dataset.countries()
    }

    /// Valid range for the date pickers, `None` when the dataset is empty
    pub fn date_bounds(&self) -> Option<DateBounds> {
        self.dataset.date_bounds()
    }

    /// The selection shown when the dashboard first loads
    ///
    /// Prefers the configured default country with the full date span.
    /// Falls back to the first country in sort order when the configured
    /// one is absent from the data, and to `None` when there is no data
    /// at all.
    pub fn default_selection(&self) -> Option<Selection> {
        let bounds = self.dataset.date_bounds()?;
        let countries = self.dataset.countries();

        let country = if countries
            .iter()
            .any(|name| name == &self.config.default_country)
        {
            self.config.default_country.clone()
        } else {
            let fallback = countries.first()?.clone();
            tracing::warn!(
                configured = %self.config.default_country,
                fallback = %fallback,
                "Configured default country not in dataset"
            );
            fallback
        };

        Some(Selection::new(country, bounds.min, bounds.max))
    }

    /// Recompute both chart series for a selection
    ///
    /// This is the handler a UI wires its country dropdown and date
    /// pickers to. Pure with respect to the dataset; an empty result
    /// means nothing matched, never an error.
    pub fn on_selection_change(&self, selection: &Selection) -> SeriesPair {
        let view = filter(&self.dataset, selection);

        tracing::debug!(
            country = %selection.country,
            start = %selection.start,
            end = %selection.end,
            matched = view.len(),
            "selection changed"
        );

        project(&view)
    }

    /// Recompute both chart figures for a selection, ready to render
    pub fn figures(&self, selection: &Selection) -> FigurePair {
        FigurePair::from_series(&self.on_selection_change(selection))
    }
}
