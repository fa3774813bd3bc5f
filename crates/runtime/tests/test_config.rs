//! Tests for loading runtime configuration from disk

use dynseq_runtime::{ConcatPolicy, ConfigError, Runtime, RuntimeConfig, Sequence, Value};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[concat]").unwrap();
    writeln!(file, "policy = \"legacy-gap\"").unwrap();
    writeln!(file, "gap = 3").unwrap();

    let config = RuntimeConfig::load(file.path()).unwrap();
    assert_eq!(config.concat, ConcatPolicy::LegacyGap { gap: 3 });

    let runtime = Runtime::new(config);
    let joined = runtime.concat(
        &Sequence::from_values([Value::Int(1)]),
        &Sequence::from_values([Value::Int(2)]),
    )
    .unwrap();
    assert_eq!(joined.len(), 5);
    assert_eq!(joined.get(4), Some(&Value::Int(2)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = RuntimeConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_load_rejects_gap_past_max_length() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[concat]").unwrap();
    writeln!(file, "policy = \"legacy-gap\"").unwrap();
    writeln!(file, "gap = 9223372036854775807").unwrap();

    let err = RuntimeConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_load_contiguous() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[concat]\npolicy = \"contiguous\"").unwrap();

    let config = RuntimeConfig::load(file.path()).unwrap();
    assert_eq!(config.concat, ConcatPolicy::Contiguous);
}
