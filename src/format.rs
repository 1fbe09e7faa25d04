use thiserror::Error;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Suffix appended to every rendered temperature
pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Unable to parse date {input:?}: {err}")]
    Parse {
        input: String,
        err: time::error::Parse,
    },
    #[error("Unable to format date {input:?}: {err}")]
    Format {
        input: String,
        err: time::error::Format,
    },
}

/// Render a temperature with the degrees Celsius suffix.
///
/// The value is written in its shortest round-trip form, so whole numbers keep their `.0`
/// (`20.0°C`, not `20°C`).  No rounding is performed; callers pass an already-rounded value.
pub fn format_temperature(temp: f64) -> String {
    format!("{temp:?}{DEGREE_SYMBOL}")
}

/// Convert an ISO 8601 timestamp with a UTC offset into a human readable date like
/// `Tuesday 06 July 2021`.
///
/// The date is rendered in the timestamp's own offset.
pub fn convert_date(iso_string: &str) -> Result<String, DateError> {
    let date_time = parse_timestamp(iso_string)?;
    date_time
        .format(format_description!(
            "[weekday repr:long] [day padding:zero] [month repr:long] [year]"
        ))
        .map_err(|err| DateError::Format {
            input: iso_string.to_string(),
            err,
        })
}

/// Parse `YYYY-MM-DDTHH:MM:SS` followed by `+HH:MM`, `+HHMM` or `Z`
fn parse_timestamp(iso_string: &str) -> Result<OffsetDateTime, DateError> {
    let extended = OffsetDateTime::parse(
        iso_string,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ),
    );
    let err = match extended {
        Ok(date_time) => return Ok(date_time),
        Err(err) => err,
    };

    if let Ok(date_time) = OffsetDateTime::parse(
        iso_string,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
        ),
    ) {
        return Ok(date_time);
    }

    if let Ok(date_time) = PrimitiveDateTime::parse(
        iso_string,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"),
    ) {
        return Ok(date_time.assume_utc());
    }

    Err(DateError::Parse {
        input: iso_string.to_string(),
        err,
    })
}
