//! CSV loading for the dataset store
//!
//! Parses an OWID-style delimited export into a [`Dataset`]: required
//! columns are located by header name, dates are parsed as `YYYY-MM-DD`,
//! counts accept the source's float formatting of whole numbers, and empty
//! cells become explicit missing values. Any malformed content is fatal;
//! the delimited-file mechanics themselves are delegated to the `csv`
//! crate.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;

use crate::dataset::error::{LoadError, LoadResult};
use crate::dataset::types::{CaseRecord, Dataset};

/// Header name of the country column in OWID-style exports
pub const COUNTRY_COLUMN: &str = "location";
/// Header name of the date column
pub const DATE_COLUMN: &str = "date";
/// Header name of the daily new-cases column
pub const NEW_CASES_COLUMN: &str = "new_cases";
/// Header name of the cumulative total-cases column
pub const TOTAL_CASES_COLUMN: &str = "total_cases";

/// Date format used by the source
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Indices of the required columns within a header row
struct ColumnMap {
    country: usize,
    date: usize,
    new_cases: usize,
    total_cases: usize,
}

impl ColumnMap {
    /// Locate the required columns by header name; extra columns are ignored
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim() == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            country: find(COUNTRY_COLUMN)?,
            date: find(DATE_COLUMN)?,
            new_cases: find(NEW_CASES_COLUMN)?,
            total_cases: find(TOTAL_CASES_COLUMN)?,
        })
    }
}

impl Dataset {
    /// Load the case table from a CSV file
    ///
    /// Fatal on an unreadable file or malformed content; see
    /// [`LoadError`] for the full taxonomy.
    pub fn load_csv(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading case data");

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::load_csv_reader(file)
    }

    /// Load the case table from any reader (useful for tests)
    pub fn load_csv_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let started = Instant::now();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            // 1-based data row number; the header occupies row 1.
            let row = index + 2;
            let record = result?;

            let country = record.get(columns.country).unwrap_or("").trim();
            let date = parse_date(record.get(columns.date).unwrap_or(""), row)?;
            let new_cases =
                parse_count(record.get(columns.new_cases).unwrap_or(""), NEW_CASES_COLUMN, row)?;
            let total_cases = parse_count(
                record.get(columns.total_cases).unwrap_or(""),
                TOTAL_CASES_COLUMN,
                row,
            )?;

            records.push(CaseRecord::new(country, date, new_cases, total_cases));
        }

        let dataset = Dataset::from_records(records);

        for (country, date) in non_monotonic_totals(&dataset) {
            tracing::warn!(
                country = %country,
                date = %date,
                "cumulative total_cases decreases in source data"
            );
        }

        tracing::info!(
            records = dataset.len(),
            countries = dataset.countries().len(),
            bounds = ?dataset.date_bounds(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "case dataset loaded"
        );

        Ok(dataset)
    }
}

/// Parse a date cell in the source's `YYYY-MM-DD` format
fn parse_date(value: &str, row: usize) -> LoadResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| LoadError::InvalidDate {
        row,
        value: value.to_string(),
    })
}

/// Parse a count cell: empty means missing, otherwise a non-negative whole
/// number (the source writes counts with a float suffix, e.g. `5.0`)
fn parse_count(value: &str, column: &str, row: usize) -> LoadResult<Option<u64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || LoadError::InvalidCount {
        row,
        column: column.to_string(),
        value: value.to_string(),
    };

    let number: f64 = value.parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 || number.fract() != 0.0 {
        return Err(invalid());
    }

    Ok(Some(number as u64))
}

/// Countries whose cumulative totals decrease at least once, paired with
/// the first date the decrease is observed
///
/// Walks the sorted records once; rows with a missing total are skipped
/// rather than treated as a reset.
fn non_monotonic_totals(dataset: &Dataset) -> Vec<(String, NaiveDate)> {
    let mut offenders = Vec::new();
    let mut current_country: Option<&str> = None;
    let mut last_total: Option<u64> = None;
    let mut flagged = false;

    for record in dataset.records() {
        if current_country != Some(record.country.as_str()) {
            current_country = Some(record.country.as_str());
            last_total = None;
            flagged = false;
        }

        if let (Some(previous), Some(current)) = (last_total, record.total_cases) {
            if current < previous && !flagged {
                offenders.push((record.country.clone(), record.date));
                flagged = true;
            }
        }

        if record.total_cases.is_some() {
            last_total = record.total_cases;
        }
    }

    offenders
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_simple_csv() {
        // Shuffled columns plus extras, rows unsorted: the loader maps by
        // header name and the dataset sorts.
        let csv_data = "iso_code,continent,location,date,total_cases,new_cases
IND,Asia,India,2020-01-01,10.0,10.0
AFG,Asia,Afghanistan,2020-01-02,5.0,5.0
AFG,Asia,Afghanistan,2020-01-01,0.0,0.0";

        let dataset = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.countries(), &["Afghanistan", "India"]);

        let first = &dataset.records()[0];
        assert_eq!(first.country, "Afghanistan");
        assert_eq!(first.date, date(2020, 1, 1));
        assert_eq!(first.new_cases, Some(0));
        assert_eq!(first.total_cases, Some(0));

        let bounds = dataset.date_bounds().unwrap();
        assert_eq!(bounds.min, date(2020, 1, 1));
        assert_eq!(bounds.max, date(2020, 1, 2));
    }

    #[test]
    fn test_missing_values_stay_missing() {
        let csv_data = "location,date,new_cases,total_cases
Afghanistan,2020-01-01,,
Afghanistan,2020-01-02,5,5";

        let dataset = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap();

        assert_eq!(dataset.records()[0].new_cases, None);
        assert_eq!(dataset.records()[0].total_cases, None);
        assert_eq!(dataset.records()[1].new_cases, Some(5));
    }

    #[test]
    fn test_integer_and_float_counts() {
        let csv_data = "location,date,new_cases,total_cases
Afghanistan,2020-01-01,7,7.0";

        let dataset = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].new_cases, Some(7));
        assert_eq!(dataset.records()[0].total_cases, Some(7));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv_data = "location,date,new_cases
Afghanistan,2020-01-01,5";

        let err = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { column } if column == TOTAL_CASES_COLUMN
        ));
    }

    #[test]
    fn test_invalid_date_is_fatal() {
        let csv_data = "location,date,new_cases,total_cases
Afghanistan,2020-01-01,0,0
Afghanistan,01/02/2020,5,5";

        let err = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { row: 3, .. }));
    }

    #[test]
    fn test_invalid_count_is_fatal() {
        for bad in ["abc", "-4", "1.5", "NaN"] {
            let csv_data = format!(
                "location,date,new_cases,total_cases\nAfghanistan,2020-01-01,{bad},10"
            );
            let err = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap_err();
            assert!(
                matches!(err, LoadError::InvalidCount { row: 2, .. }),
                "expected InvalidCount for {bad:?}"
            );
        }
    }

    #[test]
    fn test_load_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "location,date,new_cases,total_cases").unwrap();
        writeln!(file, "Afghanistan,2020-01-01,0,0").unwrap();
        writeln!(file, "Afghanistan,2020-01-02,5,5").unwrap();

        let dataset = Dataset::load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load_csv(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_empty_data_is_valid() {
        let csv_data = "location,date,new_cases,total_cases\n";
        let dataset = Dataset::load_csv_reader(csv_data.as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.date_bounds().is_none());
    }

    #[test]
    fn test_non_monotonic_totals_detected() {
        let dataset = Dataset::from_records(vec![
            CaseRecord::new("Afghanistan", date(2020, 1, 1), 0, 10),
            CaseRecord::new("Afghanistan", date(2020, 1, 2), 0, 8),
            CaseRecord::new("Afghanistan", date(2020, 1, 3), 0, 6),
            CaseRecord::new("India", date(2020, 1, 1), 0, 5),
            CaseRecord::new("India", date(2020, 1, 2), 0, 7),
        ]);

        let offenders = non_monotonic_totals(&dataset);
        assert_eq!(offenders, vec![("Afghanistan".to_string(), date(2020, 1, 2))]);
    }

    #[test]
    fn test_monotonic_across_missing_totals() {
        let dataset = Dataset::from_records(vec![
            CaseRecord::new("Brazil", date(2020, 1, 1), 0, 3),
            CaseRecord::new("Brazil", date(2020, 1, 2), 0, None),
            CaseRecord::new("Brazil", date(2020, 1, 3), 0, 4),
        ]);

        assert!(non_monotonic_totals(&dataset).is_empty());
    }
}
