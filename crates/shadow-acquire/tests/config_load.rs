use std::io::Write;

use shadow_acquire::SchedulerConfig;
use shadow_core::ShadowError;

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_fill_missing_fields() {
    let file = write_yaml("eta: 0.5\n");
    let config = SchedulerConfig::load(file.path()).unwrap();
    assert_eq!(config.eta, 0.5);
    assert_eq!(config.max_rounds, 1_000_000);
    assert_eq!(SchedulerConfig::default().eta, 0.9);
}

#[test]
fn out_of_range_values_are_rejected() {
    let file = write_yaml("eta: -1.0\n");
    match SchedulerConfig::load(file.path()).unwrap_err() {
        ShadowError::Config(info) => assert_eq!(info.code, "invalid-eta"),
        other => panic!("unexpected error variant: {:?}", other),
    }
    let file = write_yaml("max_rounds: 0\n");
    assert_eq!(
        SchedulerConfig::load(file.path()).unwrap_err().info().code,
        "invalid-max-rounds"
    );
}

#[test]
fn unreadable_and_malformed_files_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = SchedulerConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert_eq!(err.info().code, "config-read");
    assert!(err.info().context.contains_key("path"));

    let file = write_yaml("eta: [1, 2\n");
    assert_eq!(
        SchedulerConfig::load(file.path()).unwrap_err().info().code,
        "config-parse"
    );
}

#[test]
fn yaml_roundtrip() {
    let config = SchedulerConfig {
        eta: 1.25,
        max_rounds: 300,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let back: SchedulerConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, back);
}
