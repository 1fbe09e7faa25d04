use serde::Deserialize;
use thiserror::Error;

use std::fmt;
use std::fs;
use std::str::FromStr;

/// Which reports to print
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSelection {
    #[default]
    All,
    Overview,
    Daily,
}

impl ReportSelection {
    pub const NAMES: [&'static str; 3] = ["all", "overview", "daily"];

    pub fn includes_overview(self) -> bool {
        matches!(self, ReportSelection::All | ReportSelection::Overview)
    }

    pub fn includes_daily(self) -> bool {
        matches!(self, ReportSelection::All | ReportSelection::Daily)
    }
}

impl FromStr for ReportSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ReportSelection::All),
            "overview" => Ok(ReportSelection::Overview),
            "daily" => Ok(ReportSelection::Daily),
            s => Err(ConfigError::UnknownReport(s.to_string())),
        }
    }
}

impl fmt::Display for ReportSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportSelection::All => "all",
            ReportSelection::Overview => "overview",
            ReportSelection::Daily => "daily",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Eq, PartialEq, Deserialize)]
pub struct Config {
    pub input_file: String,
    #[serde(default)]
    pub report: ReportSelection,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {err}")]
    Io { path: String, err: std::io::Error },
    #[error("Unable to parse config file {path}: {err}")]
    Json {
        path: String,
        err: serde_json::Error,
    },
    #[error("Unknown report {0:?}, expected one of all, overview, daily")]
    UnknownReport(String),
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let conf_str = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_string(),
            err,
        })?;
        let conf = Config::from_json(&conf_str).map_err(|err| ConfigError::Json {
            path: path.to_string(),
            err,
        })?;
        info!("Loaded config from {}: {:?}", path, conf);
        Ok(conf)
    }

    pub fn from_json(conf_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(conf_str)
    }
}
