//! Integration tests for configuration loading from disk.

use std::io::Write;

use sumo_config::{ConfigError, OutputType, SearchKind, load_config};

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn loads_a_complete_document() {
    let file = write_config(
        r#"
sumologic_environment:
  api_base_url: https://api.eu.sumologic.com/api
  api_access_id: suXYZ
  api_access_key: s3cret
sumologic_search:
  query: "error | count by _sourceCategory"
  from: "-2d"
  to: "now"
  timeZone: "Europe/Paris"
  byReceiptTime: true
  autoParsingMode: true
  type: records
processing:
  debug: true
  timeout: 120
  batch: 500
  output_type: csv
  screen_max_cell_width: 40
  output_destination: /tmp/results.csv
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.environment.api_base_url,
        "https://api.eu.sumologic.com/api"
    );
    assert_eq!(config.search.kind, SearchKind::Records);
    assert_eq!(config.search.time_zone, "Europe/Paris");
    assert!(config.search.by_receipt_time);
    assert_eq!(config.processing.output_type, OutputType::Csv);
    assert_eq!(config.processing.batch, 500);
    assert_eq!(
        config.processing.output_destination.as_deref(),
        Some(std::path::Path::new("/tmp/results.csv"))
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_config(std::path::Path::new("/nonexistent/sumo.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn unknown_search_type_is_a_parse_error() {
    let file = write_config(
        r#"
sumologic_environment:
  api_base_url: https://api.sumologic.com/api
  api_access_id: id
  api_access_key: key
sumologic_search:
  query: "error"
  from: "now"
  to: "now"
  timeZone: "UTC"
  type: aggregates
processing:
  output_type: screen
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn unknown_output_type_is_a_parse_error() {
    let file = write_config(
        r#"
sumologic_environment:
  api_base_url: https://api.sumologic.com/api
  api_access_id: id
  api_access_key: key
sumologic_search:
  query: "error"
  from: "now"
  to: "now"
  timeZone: "UTC"
  type: messages
processing:
  output_type: pdf
"#,
    );

    assert!(matches!(
        load_config(file.path()).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn messages_with_csv_is_rejected() {
    let file = write_config(
        r#"
sumologic_environment:
  api_base_url: https://api.sumologic.com/api
  api_access_id: id
  api_access_key: key
sumologic_search:
  query: "error"
  from: "-15m"
  to: "now"
  timeZone: "UTC"
  type: messages
processing:
  output_type: csv
  output_destination: /tmp/out.csv
"#,
    );

    assert!(matches!(
        load_config(file.path()).unwrap_err(),
        ConfigError::UnsupportedCombination { .. }
    ));
}
