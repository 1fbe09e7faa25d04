#![forbid(unsafe_code)]

extern crate csv;
#[macro_use]
extern crate log;
extern crate serde;
extern crate time;

pub mod config;
pub mod convert;
pub mod format;
pub mod record;
pub mod report;
pub mod stats;
#[macro_use]
mod timed;

pub use crate::config::{Config, ConfigError, ReportSelection};
pub use crate::convert::{ConvertError, fahrenheit_to_celsius, parse_fahrenheit_to_celsius};
pub use crate::format::{DEGREE_SYMBOL, DateError, convert_date, format_temperature};
pub use crate::record::{LoadError, WeatherDataset, WeatherRecord, load_records};
pub use crate::report::{ReportError, generate_daily_summary, generate_overview};
pub use crate::stats::{Extremum, StatsError, find_max, find_min, mean};
