use filter_analyzer::analyzer::Analyzer;
use filter_analyzer::config::{AnalyzerConfig, ConfigError, load_config, load_config_from_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_config_without_path_uses_defaults() {
    let config = load_config(None).expect("defaults load");
    assert_eq!(config, AnalyzerConfig::default());
    assert_eq!(config.placeholder, "<value>");
    assert_eq!(config.wildcard, '*');
}

#[test]
fn test_custom_placeholder_and_pattern_drive_analysis() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("analyzer.toml");
    fs::write(
        &path,
        r#"
placeholder = "?"
filter_pattern = 'SRCH filter=\[([^\]]+)\]'
"#,
    )
    .expect("write config");

    let config = load_config_from_path(&path).expect("config loads");
    let mut analyzer = Analyzer::new(&config).expect("analyzer builds");
    analyzer.process_line("conn=1 op=1 SRCH filter=[(&(uid=jdoe)(cn=J*))]");
    analyzer.process_line(r#"conn=1 op=2 SRCH filter="(uid=ignored)""#);

    let report = analyzer.finish();
    assert_eq!(report.full_filters.get("(&(uid=?)(cn=?*))"), Some(1));
    assert_eq!(report.full_filters.len(), 1);
    assert_eq!(report.stats.filters, 1);
}

#[test]
fn test_max_entries_from_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("analyzer.toml");
    fs::write(&path, "max_entries = 1\n").expect("write config");

    let config = load_config_from_path(&path).expect("config loads");
    assert_eq!(config.max_entries, Some(1));

    let mut analyzer = Analyzer::new(&config).expect("analyzer builds");
    analyzer.process_line(r#"filter="(cn=a)""#);
    analyzer.process_line(r#"filter="(sn=a)""#);
    let report = analyzer.finish();
    assert_eq!(report.full_filters.len(), 1);
    assert_eq!(report.full_filters.dropped(), 1);
}

#[test]
fn test_missing_config_file_is_read_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config_from_path(&dir.path().join("nope.toml")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "placeholder = [\n").expect("write config");

    let err = load_config_from_path(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("invalid.toml");
    fs::write(&path, "placeholder = \"\"\n").expect("write config");

    let err = load_config_from_path(&path).expect_err("must fail");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            key: "placeholder",
            ..
        }
    ));
}
