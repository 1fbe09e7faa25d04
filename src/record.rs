use thiserror::Error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A series of daily weather observations, in the order they were read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDataset {
    /// The observations
    pub records: Vec<WeatherRecord>,
}

/// A single day of weather
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    /// ISO 8601 timestamp of the observation, kept as written in the source
    pub date: String,
    /// Lowest temperature of the day, in Fahrenheit
    pub low_f: i32,
    /// Highest temperature of the day, in Fahrenheit
    pub high_f: i32,
}

impl WeatherRecord {
    pub fn new(date: impl Into<String>, low_f: i32, high_f: i32) -> WeatherRecord {
        WeatherRecord {
            date: date.into(),
            low_f,
            high_f,
        }
    }
}

impl WeatherDataset {
    /// Load a dataset from a CSV file.  The file is closed before this returns, whether or not
    /// parsing succeeded.
    pub fn from_path(path: &Path) -> Result<WeatherDataset, LoadError> {
        let file = File::open(path).map_err(|err| LoadError::Io {
            path: path.display().to_string(),
            err,
        })?;
        let dataset = WeatherDataset::from_reader(file)?;

        info!("Read {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Load a dataset from any source of CSV text
    pub fn from_reader<R: Read>(reader: R) -> Result<WeatherDataset, LoadError> {
        Ok(WeatherDataset {
            records: load_records(reader)?,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read `date,low,high` rows from CSV text.
///
/// The first line is always treated as a header and discarded, and blank lines are skipped.
/// Any further columns after the third are ignored.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<WeatherRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let mut records: Vec<WeatherRecord> = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, |pos| pos.line());

        let field = |idx: usize, name: &'static str| {
            row.get(idx).ok_or(LoadError::MissingField {
                line,
                field: name,
                found: row.len(),
            })
        };
        let temperature = |idx: usize, name: &'static str| -> Result<i32, LoadError> {
            let value = field(idx, name)?;
            value
                .parse::<i32>()
                .map_err(|err| LoadError::InvalidTemperature {
                    line,
                    field: name,
                    value: value.to_string(),
                    err,
                })
        };

        let date = field(0, "date")?;
        let low_f = temperature(1, "low")?;
        let high_f = temperature(2, "high")?;
        debug!("Line {}: {} low={} high={}", line, date, low_f, high_f);

        records.push(WeatherRecord::new(date, low_f, high_f));
    }

    Ok(records)
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open {path}: {err}")]
    Io { path: String, err: std::io::Error },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: missing {field} column (found {found} fields)")]
    MissingField {
        line: u64,
        field: &'static str,
        found: usize,
    },
    #[error("Line {line}: {field} temperature {value:?} is not an integer: {err}")]
    InvalidTemperature {
        line: u64,
        field: &'static str,
        value: String,
        err: std::num::ParseIntError,
    },
}
