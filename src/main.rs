#![forbid(unsafe_code)]

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;

use weather_report::{
    Config, ConfigError, LoadError, ReportError, ReportSelection, WeatherDataset,
    generate_daily_summary, generate_overview, timed,
};

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};
use env_logger::Env;
use thiserror::Error;

use std::path::Path;
use std::process;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let env = Env::default().filter_or("WEATHER_LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let matches = Command::new("weather-report")
        .version("0.1")
        .about("Summarise daily low/high temperatures from a CSV file")
        .arg(
            Arg::new("input_file")
                .short('i')
                .long("input_file")
                .default_value("weather.csv"),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .default_value("all")
                .value_parser(ReportSelection::NAMES),
        )
        .arg(Arg::new("config").short('c').long("config"))
        .get_matches();

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(1);
    }
}

/// Merge the config file (if any) with the command line.  Flags given explicitly on the command
/// line win over the file.
fn resolve_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);
    let input_file = matches
        .get_one::<String>("input_file")
        .cloned()
        .unwrap_or_default();
    let report: ReportSelection = matches
        .get_one::<String>("report")
        .map_or(Ok(ReportSelection::All), |name| name.parse())?;

    let Some(path) = matches.get_one::<String>("config") else {
        return Ok(Config { input_file, report });
    };

    let mut conf = Config::from_file(path)?;
    if from_cli("input_file") {
        conf.input_file = input_file;
    }
    if from_cli("report") {
        conf.report = report;
    }
    Ok(conf)
}

fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let conf = resolve_config(matches)?;

    let dataset = timed!(
        || WeatherDataset::from_path(Path::new(&conf.input_file)),
        "Reading weather data from {}",
        conf.input_file
    )?;

    // render everything before printing so a failure leaves stdout empty
    let overview = if conf.report.includes_overview() {
        Some(timed!(
            || generate_overview(&dataset.records),
            "Generating {} day overview",
            dataset.len()
        )?)
    } else {
        None
    };
    let daily = if conf.report.includes_daily() {
        Some(timed!(
            || generate_daily_summary(&dataset.records),
            "Generating daily summary"
        )?)
    } else {
        None
    };

    if let Some(overview) = &overview {
        print!("{overview}");
    }
    if let Some(daily) = &daily {
        if overview.is_some() {
            println!();
        }
        print!("{daily}");
    }
    Ok(())
}
