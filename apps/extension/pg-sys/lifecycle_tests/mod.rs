//! Host lifecycle in a fresh process.
//!
//! Kept out of `integration_tests` because it asserts on process-wide state that
//! any earlier `pg_sys_init` in the same process would already have set.

use pg_sys::ffi::{pg_sys_init, sys_eval, sys_exec, sys_free};
use pg_sys::logger::{self, LOG_FILE_NAME};
use pg_sys::state::{is_configured, ops};

use models::{HOST_HEADER_SIZE, HostByteString};
use sys_core::SysConfig;

use std::ffi::CString;
use std::path::Path;
use std::ptr;

use serial_test::serial;

fn host_arg(payload: &str) -> Vec<u8> {
    let total = (HOST_HEADER_SIZE + payload.len()) as u32;
    let mut raw = HostByteString::header_for(total).to_vec();
    raw.extend_from_slice(payload.as_bytes());
    raw
}

fn c_path(path: &Path) -> CString {
    CString::new(path.to_string_lossy().as_bytes()).unwrap()
}

/// **VALUE**: Verifies the configuration and logger from the first successful init are
/// the ones in effect, whatever ran before it.
///
/// **WHY THIS MATTERS**: A backend can call `sys_exec` before `pg_sys_init`, and a
/// host that sees init fail may retry it. Neither may cause a later successful init to
/// report 0 while its interpreter, chunk size, logging switch or log file are dropped.
///
/// **BUG THIS CATCHES**: Would catch `ops()` storing the defaults process-wide, and the
/// logger marking itself initialized before the dispatch is installed.
#[test]
#[serial]
fn given_operation_and_failed_init_first_when_init_succeeds_then_its_settings_apply() {
    // GIVEN: An operation runs before any init
    let command = host_arg("true");
    // SAFETY: `command` is a complete host byte string
    let status = unsafe { sys_exec(command.as_ptr()) };
    assert_eq!(status, 0);
    assert!(!is_configured());

    // AND: A first init fails because the directory does not exist
    let scratch = tempfile::tempdir().unwrap();
    let missing = c_path(&scratch.path().join("missing"));
    // SAFETY: `missing` is a valid NUL-terminated string
    let failed = unsafe { pg_sys_init(missing.as_ptr()) };
    assert_eq!(failed, -1);
    assert!(!logger::is_installed());
    assert!(!is_configured());

    // WHEN: Init is retried with a directory holding a non-default config
    let dir = tempfile::tempdir().unwrap();
    let mut config = SysConfig::default();
    config.eval.chunk_size = 7;
    config.logging.log_commands = true;
    config.save(dir.path()).unwrap();
    let path = c_path(dir.path());
    // SAFETY: `path` is a valid NUL-terminated string
    let succeeded = unsafe { pg_sys_init(path.as_ptr()) };

    // THEN: The retry installs both the logger and the loaded configuration
    assert_eq!(succeeded, 0);
    assert!(logger::is_installed());
    assert!(dir.path().join(LOG_FILE_NAME).exists());
    assert!(is_configured());
    assert_eq!(ops().chunk_size(), 7);
    assert!(ops().log_commands());

    // AND: Operations run with the loaded chunk size
    let command = host_arg("echo abcdefghij");
    // SAFETY: `command` is a complete host byte string
    let value = unsafe { sys_eval(command.as_ptr()) };
    assert!(!value.is_null());
    let mut header = [0u8; HOST_HEADER_SIZE];
    // SAFETY: non-null results start with a header and hold `total` bytes
    let payload = unsafe {
        ptr::copy_nonoverlapping(value, header.as_mut_ptr(), HOST_HEADER_SIZE);
        let total = HostByteString::declared_size(header);
        std::slice::from_raw_parts(value.add(HOST_HEADER_SIZE), total - HOST_HEADER_SIZE).to_vec()
    };
    // SAFETY: `value` came from `sys_eval` and is freed once
    unsafe { sys_free(value) };
    assert_eq!(payload, b"6162636465666768696A");
}
