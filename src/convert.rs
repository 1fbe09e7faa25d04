use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Temperature {input:?} is not numeric: {err}")]
    NotNumeric {
        input: String,
        err: std::num::ParseFloatError,
    },
}

/// Convert a temperature from Fahrenheit to Celsius, rounded to one decimal place.
///
/// Uses the fixed factor `0.5556` rather than `5/9`.  Ties on the last digit round to even.
pub fn fahrenheit_to_celsius(temp_in_fahrenheit: f64) -> f64 {
    let celsius = (temp_in_fahrenheit - 32f64) * 0.5556;
    (celsius * 10f64).round_ties_even() / 10f64
}

/// Convert a temperature given as text, e.g. a raw CSV field
pub fn parse_fahrenheit_to_celsius(temp_in_fahrenheit: &str) -> Result<f64, ConvertError> {
    let temp = temp_in_fahrenheit
        .trim()
        .parse::<f64>()
        .map_err(|err| ConvertError::NotNumeric {
            input: temp_in_fahrenheit.to_string(),
            err,
        })?;
    Ok(fahrenheit_to_celsius(temp))
}
