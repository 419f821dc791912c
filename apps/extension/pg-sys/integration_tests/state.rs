use pg_sys::ffi::pg_sys_init;
use pg_sys::state::{configure, ops};

use sys_core::{CONFIG_FILE_NAME, SysConfig};

use std::ffi::CString;

use serial_test::serial;

/// **VALUE**: Verifies initialization with a config directory succeeds and is repeatable.
///
/// **WHY THIS MATTERS**: Every backend process that loads the library may call
/// `pg_sys_init`; repeated calls must not report failure.
///
/// **BUG THIS CATCHES**: Would catch `OnceLock::set` failures being surfaced as errors.
#[test]
#[serial]
fn given_config_dir_when_pg_sys_init_called_twice_then_both_succeed() {
    // GIVEN: A directory with a default config file
    let dir = tempfile::tempdir().unwrap();
    SysConfig::default().save(dir.path()).unwrap();
    let path = CString::new(dir.path().to_string_lossy().as_bytes()).unwrap();

    // WHEN: Initializing twice
    // SAFETY: `path` is a valid NUL-terminated string
    let first = unsafe { pg_sys_init(path.as_ptr()) };
    // SAFETY: as above
    let second = unsafe { pg_sys_init(path.as_ptr()) };

    // THEN: Both succeed and defaults are in effect
    assert_eq!(first, 0);
    assert_eq!(second, 0);
    assert_eq!(ops().chunk_size(), SysConfig::default().eval.chunk_size);
}

#[test]
#[serial]
fn given_null_dir_when_pg_sys_init_called_then_succeeds() {
    // SAFETY: null is explicitly allowed
    let status = unsafe { pg_sys_init(std::ptr::null()) };

    assert_eq!(status, 0);
}

/// **VALUE**: Verifies an invalid config file is reported as a failure.
///
/// **WHY THIS MATTERS**: A broken config should fail loudly at init, not silently fall
/// back to running commands with unexpected settings.
///
/// **BUG THIS CATCHES**: Would catch swallowing the parse error into defaults.
#[test]
#[serial]
fn given_malformed_config_when_configured_then_returns_error() {
    // GIVEN: A directory with invalid JSON
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ broken").unwrap();

    // WHEN: Configuring
    let result = configure(Some(dir.path()));

    // THEN: Error
    assert!(result.is_err());
}
