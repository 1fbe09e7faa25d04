use weather_report::{
    Config, LoadError, ReportError, ReportSelection, WeatherDataset, WeatherRecord,
    generate_daily_summary, generate_overview,
};

use std::io::Write;

use tempfile::NamedTempFile;

const FIVE_DAYS: &str = "\
date,min,max
2021-07-02T07:00:00+00:00,49,67
2021-07-03T07:00:00+00:00,57,68
2021-07-04T07:00:00+00:00,56,62
2021-07-05T07:00:00+00:00,55,61
2021-07-06T07:00:00+00:00,53,62

";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn five_day_overview_from_file() {
    let file = write_csv(FIVE_DAYS);
    let dataset = WeatherDataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 5);

    let expected = "\
5 Day Overview
  The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.
  The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.
  The average low this week is 12.2°C.
  The average high this week is 17.8°C.
";
    assert_eq!(generate_overview(&dataset.records).unwrap(), expected);
}

#[test]
fn five_day_daily_summary_from_file() {
    let file = write_csv(FIVE_DAYS);
    let dataset = WeatherDataset::from_path(file.path()).unwrap();
    let summary = generate_daily_summary(&dataset.records).unwrap();

    assert!(summary.starts_with(
        "---- Friday 02 July 2021 ----\n  Minimum Temperature: 9.4°C\n  Maximum Temperature: 19.4°C\n\n"
    ));
    assert!(summary.ends_with(
        "---- Tuesday 06 July 2021 ----\n  Minimum Temperature: 11.7°C\n  Maximum Temperature: 16.7°C\n\n"
    ));

    let headers: Vec<&str> = summary
        .lines()
        .filter(|line| line.starts_with("---- "))
        .collect();
    assert_eq!(
        headers,
        vec![
            "---- Friday 02 July 2021 ----",
            "---- Saturday 03 July 2021 ----",
            "---- Sunday 04 July 2021 ----",
            "---- Monday 05 July 2021 ----",
            "---- Tuesday 06 July 2021 ----",
        ]
    );
}

#[test]
fn one_block_per_data_row() {
    let file = write_csv(
        "date,min,max\n\n2021-07-10T07:00:00+00:00,60,80\n\n\n2021-07-09T07:00:00+00:00,61,79\n",
    );
    let dataset = WeatherDataset::from_path(file.path()).unwrap();
    assert_eq!(
        dataset.records,
        vec![
            WeatherRecord::new("2021-07-10T07:00:00+00:00", 60, 80),
            WeatherRecord::new("2021-07-09T07:00:00+00:00", 61, 79),
        ]
    );

    let summary = generate_daily_summary(&dataset.records).unwrap();
    let blocks: Vec<&str> = summary.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("---- Saturday 10 July 2021 ----"));
    assert!(blocks[1].starts_with("---- Friday 09 July 2021 ----"));
}

#[test]
fn header_only_file_has_no_overview() {
    let file = write_csv("date,min,max\n");
    let dataset = WeatherDataset::from_path(file.path()).unwrap();
    assert!(dataset.is_empty());
    assert!(matches!(
        generate_overview(&dataset.records),
        Err(ReportError::EmptyDataset)
    ));
    assert_eq!(generate_daily_summary(&dataset.records).unwrap(), "");
}

#[test]
fn malformed_row_aborts_loading() {
    let file = write_csv("date,min,max\n2021-07-02T07:00:00+00:00,49,67\n2021-07-03T07:00:00+00:00,cold,68\n");
    assert!(matches!(
        WeatherDataset::from_path(file.path()),
        Err(LoadError::InvalidTemperature { line: 3, .. })
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(matches!(
        WeatherDataset::from_path(&path),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn config_file_is_read() {
    let file = write_csv(r#"{"input_file": "weather.csv", "report": "overview"}"#);
    let conf = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(conf.input_file, "weather.csv");
    assert_eq!(conf.report, ReportSelection::Overview);
}
