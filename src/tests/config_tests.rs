use std::fs;
use std::path::{ Path, PathBuf };

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::config::{ ConfigError, ProbeConfig, DEFAULT_PATTERN };

#[test]
fn defaults_match_the_stress_setup() {
    let config = ProbeConfig::default();

    assert_eq!(config.chain_length, 6000);
    assert_eq!(config.member_limit, 50);
    assert_eq!(config.pattern, DEFAULT_PATTERN);
    assert_eq!(config.verilator.flags, vec![
        "-x-assign fast --x-initial fast",
        "-Wno-UNOPTTHREADS",
        "--no-debug-partition"
    ]);
    assert_eq!(config.source_path(), PathBuf::from("obj_dir").join("t_emit_memb_limit.v"));
    // The chain must trip the limit at least 50 times
    assert!(config.expected_splits() >= 50);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_yaml_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("membprobe.yaml");
    fs::write(&path, "chain_length: 300\nverilator:\n  binary: /opt/verilator/bin/verilator\n").unwrap();

    let config = ProbeConfig::from_file(&path).unwrap();

    assert_eq!(config.chain_length, 300);
    assert_eq!(config.verilator.binary, "/opt/verilator/bin/verilator");
    assert_eq!(config.verilator.flags.len(), 3);
    assert_eq!(config.vm_prefix, "Vt");
}

#[test]
fn yaml_round_trip_of_defaults() {
    let config = ProbeConfig::default();
    let yaml = config.to_yaml().unwrap();
    let parsed: ProbeConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn missing_file_is_read_error() {
    let err = ProbeConfig::from_file(Path::new("/nonexistent/membprobe.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileReadError(_)));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "chain_length: [not, a, number]\n").unwrap();

    let err = ProbeConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn validate_rejects_bad_values() {
    let cases = [
        ProbeConfig { chain_length: 0, ..ProbeConfig::default() },
        ProbeConfig { member_limit: 0, ..ProbeConfig::default() },
        ProbeConfig { pattern: "  ".to_string(), ..ProbeConfig::default() },
        ProbeConfig { min_matches: 0, ..ProbeConfig::default() },
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidValue { .. })),
            "accepted {:?}",
            config
        );
    }
}

#[test]
fn environment_overrides() {
    // Only test that touches MEMBPROBE_* variables
    std::env::set_var("MEMBPROBE_VERILATOR", "/usr/local/bin/verilator");
    std::env::set_var("MEMBPROBE_OBJ_DIR", "/tmp/membprobe_obj");
    std::env::set_var("MEMBPROBE_CHAIN_LENGTH", "128");

    let mut config = ProbeConfig::default();
    config.apply_env_overrides().unwrap();
    assert_eq!(config.verilator.binary, "/usr/local/bin/verilator");
    assert_eq!(config.obj_dir, PathBuf::from("/tmp/membprobe_obj"));
    assert_eq!(config.chain_length, 128);

    std::env::set_var("MEMBPROBE_CHAIN_LENGTH", "lots");
    let err = ProbeConfig::default().apply_env_overrides().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    std::env::remove_var("MEMBPROBE_VERILATOR");
    std::env::remove_var("MEMBPROBE_OBJ_DIR");
    std::env::remove_var("MEMBPROBE_CHAIN_LENGTH");
}
