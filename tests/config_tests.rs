//! Configuration file tests.
//!
//! Loads YAML configs from temporary directories and checks merging with
//! command-line overrides and the evaluation they drive.

use cloud_db_advisor::{
    AppConfig, Architecture, Validatable, evaluate,
    config::{ConfigFileError, ConfigOverrides, PriorityPreset, load_config_file, load_or_default},
    reports::ReportFormat,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, yaml).expect("write config");
    path
}

#[test]
fn test_partial_file_keeps_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, ".cloud-db-advisor.yaml", "priorities:\n  carbon: 8\n");

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.priorities.carbon, 8.0);
    assert_eq!(config.priorities.cost, 5.0);
    assert_eq!(config.workload.storage_gb, 1000.0);
    assert_eq!(config.output.format, ReportFormat::Auto);
    assert!(config.is_valid());
}

#[test]
fn test_file_drives_evaluation() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "advisor.yaml",
        r"
workload:
  storage_gb: 1000
  requests_millions: 100
priorities:
  cost: 0
  carbon: 0
  security: 1
output:
  format: json
",
    );

    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.output.format, ReportFormat::Json);

    let evaluation = evaluate(&config).unwrap();
    assert_eq!(
        evaluation.recommendation.architecture_key,
        Architecture::RdsMultiAz
    );
}

#[test]
fn test_cli_overrides_beat_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "advisor.yaml",
        "workload:\n  storage_gb: 20\npriorities:\n  cost: 9\n  carbon: 1\n  security: 1\n",
    );

    let overrides = ConfigOverrides {
        storage_gb: Some(1000.0),
        cost_weight: Some(1.0),
        carbon_weight: Some(8.0),
        format: Some(ReportFormat::Markdown),
        ..ConfigOverrides::default()
    };
    let (config, _) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(config.workload.storage_gb, 1000.0);
    assert_eq!(config.priorities.cost, 1.0);
    assert_eq!(config.priorities.carbon, 8.0);
    assert_eq!(config.priorities.security, 1.0);
    assert_eq!(config.output.format, ReportFormat::Markdown);

    let evaluation = evaluate(&config).unwrap();
    assert_eq!(
        evaluation.recommendation.architecture_key,
        Architecture::Dynamodb
    );
}

#[test]
fn test_invalid_file_values_reported() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "bad.yaml",
        "workload:\n  storage_gb: -10\nbehavior:\n  min_score: 140\n",
    );

    let config = load_config_file(&path).unwrap();
    let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
    assert!(fields.contains(&"workload.storage_gb".to_string()));
    assert!(fields.contains(&"behavior.min_score".to_string()));
    assert!(evaluate(&config).is_err());
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "broken.yaml", "workload: [unterminated");

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigFileError::Parse(_))
    ));
    let (config, loaded_from) = load_or_default(Some(&path));
    assert!(loaded_from.is_none());
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_preset_round_trips_through_yaml() {
    let config = AppConfig::from_preset(PriorityPreset::SecurityFirst);
    let yaml = serde_yaml::to_string(&config).unwrap();

    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "preset.yaml", &yaml);
    assert_eq!(load_config_file(&path).unwrap(), config);
}

#[test]
fn test_table_format_and_projection_cap_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        "advisor.yaml",
        "output:\n  format: table\nbehavior:\n  projection_months: 4294967295\n",
    );

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.output.format, ReportFormat::Table);
    let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, ["behavior.projection_months"]);
}
