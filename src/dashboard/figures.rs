//! Chart figure encoding
//!
//! Wraps projected series in the figure shape chart renderers consume:
//! a figure holds a list of traces, each trace carries parallel `x` and
//! `y` arrays plus a chart type tag. Serialized with serde_json this is
//! the `{"data": [{"x": [...], "y": [...], "type": "bar"}]}` object the
//! dashboard frontend plots directly.

use chrono::NaiveDate;
use serde::Serialize;

use crate::view::{Series, SeriesPair};

/// How a trace is drawn
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// One bar per date
    Bar,
    /// A connected line through the points
    Line,
}

/// One renderable trace: parallel date and value arrays
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartTrace {
    /// Dates along the x axis
    pub x: Vec<NaiveDate>,
    /// Values along the y axis, `null` in JSON where the data had gaps
    pub y: Vec<Option<u64>>,
    /// Chart type tag, serialized as `"type"`
    #[serde(rename = "type")]
    pub kind: ChartKind,
}

impl ChartTrace {
    /// Build a trace from a projected series
    pub fn from_series(series: &Series, kind: ChartKind) -> Self {
        let mut x = Vec::with_capacity(series.len());
        let mut y = Vec::with_capacity(series.len());
        for point in &series.points {
            x.push(point.date);
            y.push(point.value);
        }

        Self { x, y, kind }
    }

    /// Build a bar trace from a projected series
    pub fn bar(series: &Series) -> Self {
        Self::from_series(series, ChartKind::Bar)
    }
}

/// A complete figure: the trace list a renderer plots as one chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartFigure {
    /// The traces to draw
    pub data: Vec<ChartTrace>,
}

impl ChartFigure {
    /// Build a single-trace bar figure from a projected series
    pub fn bar(series: &Series) -> Self {
        Self {
            data: vec![ChartTrace::bar(series)],
        }
    }
}

/// The two figures the dashboard shows for one selection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FigurePair {
    /// Daily new cases, drawn as bars
    pub new_cases: ChartFigure,
    /// Cumulative total cases, drawn as bars
    pub total_cases: ChartFigure,
}

impl FigurePair {
    /// Build both figures from a projected series pair
    pub fn from_series(series: &SeriesPair) -> Self {
        Self {
            new_cases: ChartFigure::bar(&series.new_cases),
            total_cases: ChartFigure::bar(&series.total_cases),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SeriesPoint;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_series() -> Series {
        Series {
            name: "new_cases".to_string(),
            points: vec![
                SeriesPoint::new(date(2020, 1, 1), 0),
                SeriesPoint::new(date(2020, 1, 2), 5),
                SeriesPoint::new(date(2020, 1, 3), None),
            ],
        }
    }

    #[test]
    fn test_trace_parallel_arrays() {
        let trace = ChartTrace::bar(&sample_series());

        assert_eq!(trace.x.len(), trace.y.len());
        assert_eq!(
            trace.x,
            vec![date(2020, 1, 1), date(2020, 1, 2), date(2020, 1, 3)]
        );
        assert_eq!(trace.y, vec![Some(0), Some(5), None]);
        assert_eq!(trace.kind, ChartKind::Bar);
    }

    #[test]
    fn test_figure_json_shape() {
        let figure = ChartFigure::bar(&sample_series());

        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"][0]["type"], "bar");
        assert_eq!(json["data"][0]["x"][0], "2020-01-01");
        assert_eq!(json["data"][0]["y"][1], 5);
        assert!(json["data"][0]["y"][2].is_null());
    }

    #[test]
    fn test_chart_kind_serialization() {
        assert_eq!(serde_json::to_string(&ChartKind::Bar).unwrap(), "\"bar\"");
        assert_eq!(serde_json::to_string(&ChartKind::Line).unwrap(), "\"line\"");
    }

    #[test]
    fn test_empty_series_yields_empty_trace() {
        let series = Series::new("total_cases");
        let trace = ChartTrace::bar(&series);

        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
    }
}
