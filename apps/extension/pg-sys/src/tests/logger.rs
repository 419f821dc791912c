// Unit tests for logger module initialization logic
// Tests focus on thread-safety and error handling

use crate::error::PgSysError;
use crate::logger::{LOG_FILE_NAME, build_dispatch, initialize, is_installed};

use std::path::PathBuf;

use serial_test::serial;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't fail.
///
/// **WHY THIS MATTERS**: `pg_sys_init` can be called by every backend that loads the
/// library. If the second call errors, the extension reports a failed init for a
/// perfectly healthy logger.
///
/// **BUG THIS CATCHES**: Would catch if the installed flag is removed, causing fern to
/// fail when trying to set a global logger twice.
#[test]
#[serial]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(is_installed());
}

/// **VALUE**: Verifies that an unwritable log directory produces a Logger error.
///
/// **WHY THIS MATTERS**: The log directory comes from the host configuration. A typo
/// must produce a clear error instead of a panic inside the database backend.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` is unwrapped instead of
/// returning a Result.
#[test]
fn given_invalid_log_dir_when_dispatch_built_then_returns_logger_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&invalid_dir);

    // THEN: Should return a Logger error naming the file
    match result {
        Err(PgSysError::Logger { message, .. }) => {
            assert!(message.contains(LOG_FILE_NAME));
        }
        Err(other) => panic!("Expected Logger error, got {other}"),
        Ok(_) => panic!("Expected Logger error, got a dispatch"),
    }
}

#[test]
fn given_valid_dir_when_dispatch_built_then_creates_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = build_dispatch(temp_dir.path());

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
