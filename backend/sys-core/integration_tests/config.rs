use sys_core::config::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use sys_core::error::ConfigError;
use sys_core::{CONFIG_FILE_NAME, SysConfig, SysOps};

use std::fs;

// ============================================================================
// Public API tests for SysConfig load/save/validate
// ============================================================================

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: Most installations never write a config file; loading must
/// not fail the extension's initialization.
///
/// **BUG THIS CATCHES**: Would catch treating a missing file as a read error.
#[test]
fn given_empty_dir_when_load_called_then_returns_defaults() {
    // GIVEN: An empty directory
    let dir = tempfile::tempdir().unwrap();

    // WHEN: Loading
    let config = SysConfig::load(dir.path()).unwrap();

    // THEN: Defaults
    assert_eq!(config, SysConfig::default());
    assert_eq!(config.eval.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(!config.logging.log_commands);
}

/// **VALUE**: Verifies save then load preserves every field.
///
/// **WHY THIS MATTERS**: A field lost on save silently reverts to its default, e.g.
/// turning verbatim command logging back off.
///
/// **BUG THIS CATCHES**: Would catch a missing serde attribute or a wrong file name.
#[test]
fn given_saved_config_when_loaded_then_matches() {
    // GIVEN: A customized config saved to disk
    let dir = tempfile::tempdir().unwrap();
    let mut config = SysConfig::default();
    config.eval.chunk_size = 4096;
    config.logging.log_commands = true;
    config.interpreter.program = String::from("/bin/bash");
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = SysConfig::load(dir.path()).unwrap();

    // THEN: Same values, no temp file left behind
    assert_eq!(loaded, config);
    assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    assert!(!dir.path().join(sys_core::CONFIG_TEMP_FILE_NAME).exists());
}

#[test]
fn given_partial_json_when_loaded_then_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "logging": { "log_commands": true } }"#,
    )
    .unwrap();

    let config = SysConfig::load(dir.path()).unwrap();

    assert!(config.logging.log_commands);
    assert_eq!(config.eval.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.interpreter, SysConfig::default().interpreter);
}

#[test]
fn given_malformed_json_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

    let result = SysConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies out-of-range chunk sizes are rejected.
///
/// **WHY THIS MATTERS**: A chunk size of 0 would make every read return immediately
/// with nothing, so eval would always report empty output.
///
/// **BUG THIS CATCHES**: Would catch removal of the chunk size bounds check.
#[test]
fn given_invalid_chunk_size_when_validated_then_returns_validation_error() {
    // GIVEN: Zero and oversized chunk sizes
    let mut zero = SysConfig::default();
    zero.eval.chunk_size = 0;
    let mut huge = SysConfig::default();
    huge.eval.chunk_size = MAX_CHUNK_SIZE + 1;

    // WHEN / THEN: Both fail
    assert!(matches!(
        zero.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
    assert!(matches!(
        huge.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_unsupported_version_when_validated_then_returns_validation_error() {
    let mut config = SysConfig::default();
    config.version = 2;

    assert!(config.validate().is_err());
}

/// **VALUE**: Verifies an empty interpreter program blocks building operations.
///
/// **WHY THIS MATTERS**: Every exec would return -1 with no hint why. The config
/// mistake must surface once, at load time.
///
/// **BUG THIS CATCHES**: Would catch `from_config` skipping interpreter validation.
#[test]
fn given_empty_interpreter_when_building_ops_then_returns_validation_error() {
    // GIVEN: A config with an empty program
    let mut config = SysConfig::default();
    config.interpreter.program = String::new();

    // WHEN: Building operations
    let result = SysOps::from_config(&config);

    // THEN: Validation error naming the problem
    match result {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert!(reason.contains("Interpreter program cannot be empty"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_config_when_building_ops_then_carries_settings() {
    let mut config = SysConfig::default();
    config.eval.chunk_size = 16;

    let ops = SysOps::from_config(&config).unwrap();

    assert_eq!(ops.chunk_size(), 16);
    assert_eq!(ops.interpreter(), &config.interpreter().unwrap());
}
