use crate::helpers::{host_arg, take_result};

use pg_sys::ffi::{sys_eval, sys_exec, sys_fileread, sys_free};

use std::ptr;

// ============================================================================
// C ABI tests, driving the library exactly as the database host would
// ============================================================================

/// **VALUE**: Verifies sys_exec returns the command's exit code across the C boundary.
///
/// **WHY THIS MATTERS**: This is the value SQL callers see from `sys_exec(...)`.
///
/// **BUG THIS CATCHES**: Would catch header decoding errors that turn "exit 3" into a
/// different command.
#[cfg(unix)]
#[test]
fn given_exit_three_when_sys_exec_called_then_returns_three() {
    // GIVEN: A host argument
    let arg = host_arg("exit 3");

    // WHEN: Calling through the C ABI
    // SAFETY: `arg` is a complete host byte string
    let status = unsafe { sys_exec(arg.as_ptr()) };

    // THEN: Exit code
    assert_eq!(status, 3);
}

#[test]
fn given_null_argument_when_sys_exec_called_then_returns_minus_one() {
    // SAFETY: null is explicitly allowed
    let status = unsafe { sys_exec(ptr::null()) };

    assert_eq!(status, -1);
}

/// **VALUE**: Verifies sys_eval returns hex text in a host byte string.
///
/// **WHY THIS MATTERS**: The host copies exactly `header - 4` bytes. A wrong header
/// truncates or overreads the hex text.
///
/// **BUG THIS CATCHES**: Would catch a header that counts only the payload.
#[cfg(unix)]
#[test]
fn given_echo_when_sys_eval_called_then_returns_hex_of_output() {
    // GIVEN: A command printing "abc\n"
    let arg = host_arg("echo abc");

    // WHEN: Evaluating and taking the result
    // SAFETY: `arg` is a complete host byte string
    let result = take_result(unsafe { sys_eval(arg.as_ptr()) });

    // THEN: Hex of "abc"
    assert_eq!(result.as_deref(), Some(b"616263".as_slice()));
}

#[cfg(unix)]
#[test]
fn given_silent_command_when_sys_eval_called_then_returns_empty_value_not_null() {
    let arg = host_arg("true");

    // SAFETY: `arg` is a complete host byte string
    let result = take_result(unsafe { sys_eval(arg.as_ptr()) });

    assert_eq!(result, Some(Vec::new()));
}

/// **VALUE**: Verifies sys_fileread returns null for a missing file.
///
/// **WHY THIS MATTERS**: The host maps null to SQL NULL; callers use `IS NULL` to check
/// for files.
///
/// **BUG THIS CATCHES**: Would catch returning an empty value instead of null.
#[test]
fn given_missing_file_when_sys_fileread_called_then_returns_null() {
    // GIVEN: A path that does not exist
    let dir = tempfile::tempdir().unwrap();
    let arg = host_arg(dir.path().join("absent").to_string_lossy().as_bytes());

    // WHEN: Reading
    // SAFETY: `arg` is a complete host byte string
    let value = unsafe { sys_fileread(arg.as_ptr()) };

    // THEN: Null
    assert!(value.is_null());
}

#[test]
fn given_existing_file_when_sys_fileread_called_then_returns_hex_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.bin");
    std::fs::write(&path, b"\x00\x10hello\n").unwrap();
    let arg = host_arg(path.to_string_lossy().as_bytes());

    // SAFETY: `arg` is a complete host byte string
    let result = take_result(unsafe { sys_fileread(arg.as_ptr()) }).unwrap();

    assert_eq!(
        hex::decode(&result).unwrap(),
        b"\x00\x10hello\n".to_vec(),
        "file content must round-trip exactly"
    );
}

#[test]
fn given_null_when_sys_free_called_then_does_nothing() {
    // SAFETY: null is explicitly allowed
    unsafe { sys_free(ptr::null_mut()) };
}
