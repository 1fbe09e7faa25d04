use crate::convert::fahrenheit_to_celsius;
use crate::format::{DateError, convert_date, format_temperature};
use crate::record::WeatherRecord;
use crate::stats::{self, StatsError};

use thiserror::Error;

use std::fmt::Write;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot summarise an empty dataset")]
    EmptyDataset,
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Build the multi-day overview: the lowest and highest temperatures with the day they occur
/// on, then the average low and high.  All temperatures are reported in Celsius.
pub fn generate_overview(records: &[WeatherRecord]) -> Result<String, ReportError> {
    let lows: Vec<i32> = records.iter().map(|r| r.low_f).collect();
    let highs: Vec<i32> = records.iter().map(|r| r.high_f).collect();

    let (Some(min), Some(max)) = (stats::find_min(&lows), stats::find_max(&highs)) else {
        return Err(ReportError::EmptyDataset);
    };
    let min_date = convert_date(&records[min.index].date)?;
    let max_date = convert_date(&records[max.index].date)?;
    debug!(
        "Lowest {}F on {}, highest {}F on {}",
        min.value, min_date, max.value, max_date
    );

    let mean_low = fahrenheit_to_celsius(stats::mean(&lows)?);
    let mean_high = fahrenheit_to_celsius(stats::mean(&highs)?);

    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(out, "{} Day Overview", records.len());
    let _ = writeln!(
        out,
        "  The lowest temperature will be {}, and will occur on {}.",
        format_temperature(fahrenheit_to_celsius(min.value)),
        min_date
    );
    let _ = writeln!(
        out,
        "  The highest temperature will be {}, and will occur on {}.",
        format_temperature(fahrenheit_to_celsius(max.value)),
        max_date
    );
    let _ = writeln!(
        out,
        "  The average low this week is {}.",
        format_temperature(mean_low)
    );
    let _ = writeln!(
        out,
        "  The average high this week is {}.",
        format_temperature(mean_high)
    );
    Ok(out)
}

/// Build one block per day, in input order, each followed by a blank line.
///
/// An empty dataset produces an empty summary.
pub fn generate_daily_summary(records: &[WeatherRecord]) -> Result<String, ReportError> {
    let mut out = String::new();
    for record in records {
        let date = convert_date(&record.date)?;
        let _ = writeln!(out, "---- {date} ----");
        let _ = writeln!(
            out,
            "  Minimum Temperature: {}",
            format_temperature(fahrenheit_to_celsius(f64::from(record.low_f)))
        );
        let _ = writeln!(
            out,
            "  Maximum Temperature: {}",
            format_temperature(fahrenheit_to_celsius(f64::from(record.high_f)))
        );
        out.push('\n');
    }
    Ok(out)
}
