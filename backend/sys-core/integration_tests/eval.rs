use crate::helpers::host;

use sys_core::error::EvalError;
use sys_core::hex::encode;
use sys_core::{SysConfig, SysOps};

// ============================================================================
// Public API tests for eval()
// ============================================================================

/// **VALUE**: Verifies captured output is hex-encoded with the trailing newline dropped.
///
/// **WHY THIS MATTERS**: This is the core contract of `sys_eval`: `echo abc` must come
/// back as `616263`, not `6162630A`.
///
/// **BUG THIS CATCHES**: Would catch encoding the newline or encoding a terminator byte
/// in its place.
#[cfg(unix)]
#[test]
fn given_command_printing_abc_newline_when_eval_called_then_returns_encoded_abc() {
    // GIVEN: Default operations
    let ops = SysOps::default();

    // WHEN: Evaluating a command that prints "abc\n"
    let text = ops.eval(&host("printf 'abc\\n'")).unwrap();

    // THEN: Encoded "abc"
    assert_eq!(text, encode(b"abc"));
    assert_eq!(text.as_str(), "616263");
}

/// **VALUE**: Verifies that silent commands return empty text rather than failing.
///
/// **WHY THIS MATTERS**: The host distinguishes "" from NULL. A command that ran and
/// printed nothing must not look like a failure.
///
/// **BUG THIS CATCHES**: Would catch treating empty output as an error.
#[cfg(unix)]
#[test]
fn given_silent_command_when_eval_called_then_returns_empty_text() {
    // GIVEN: Default operations
    let ops = SysOps::default();

    // WHEN: Evaluating `true`
    let text = ops.eval(&host("true")).unwrap();

    // THEN: Empty, not an error
    assert!(text.is_empty());
    assert_eq!(text.as_str(), "");
}

#[cfg(unix)]
#[test]
fn given_multiline_output_when_eval_called_then_keeps_inner_newlines() {
    let text = SysOps::default()
        .eval(&host("printf 'a\\nb\\n'"))
        .unwrap();

    assert_eq!(text, encode(b"a\nb"));
}

/// **VALUE**: Verifies binary output (including NUL bytes) survives capture.
///
/// **WHY THIS MATTERS**: The hex transport exists so arbitrary bytes can be returned.
/// A strlen-based accumulator would cut the output at the first NUL.
///
/// **BUG THIS CATCHES**: Would catch C-string handling of the captured output.
#[cfg(unix)]
#[test]
fn given_binary_output_when_eval_called_then_all_bytes_are_encoded() {
    // GIVEN: A command emitting NUL and high bytes
    let ops = SysOps::default();

    // WHEN: Evaluating
    let text = ops.eval(&host("printf 'a\\000\\377b'")).unwrap();

    // THEN: Every byte is present
    assert_eq!(::hex::decode(text.as_str()).unwrap(), b"a\0\xffb");
}

/// **VALUE**: Verifies output larger than the chunk size is fully accumulated.
///
/// **WHY THIS MATTERS**: Output arrives in bounded chunks; losing or duplicating a chunk
/// corrupts anything longer than one read.
///
/// **BUG THIS CATCHES**: Would catch overwriting the buffer per chunk instead of appending.
#[cfg(unix)]
#[test]
fn given_output_larger_than_chunk_size_when_eval_called_then_accumulates_everything() {
    // GIVEN: A tiny chunk size
    let mut config = SysConfig::default();
    config.eval.chunk_size = 3;
    let ops = SysOps::from_config(&config).unwrap();

    // WHEN: Evaluating a 26-letter line
    let text = ops
        .eval(&host("printf 'abcdefghijklmnopqrstuvwxyz\\n'"))
        .unwrap();

    // THEN: All letters present
    assert_eq!(text, encode(b"abcdefghijklmnopqrstuvwxyz"));
}

#[cfg(unix)]
#[test]
fn given_failing_command_with_output_when_eval_called_then_still_returns_output() {
    let text = SysOps::default()
        .eval(&host("echo partial; exit 3"))
        .unwrap();

    assert_eq!(text, encode(b"partial"));
}

/// **VALUE**: Verifies that a spawn failure becomes an explicit error.
///
/// **WHY THIS MATTERS**: Reading from a pipe that was never opened is undefined in a
/// naive implementation. The failure must surface before any read.
///
/// **BUG THIS CATCHES**: Would catch swallowing the spawn error into empty output.
#[test]
fn given_missing_interpreter_when_eval_called_then_returns_spawn_error() {
    // GIVEN: A nonexistent interpreter
    let mut config = SysConfig::default();
    config.interpreter.program = String::from("/nonexistent/pg-sys-shell");
    let ops = SysOps::from_config(&config).unwrap();

    // WHEN: Evaluating
    let result = ops.eval(&host("echo hi"));

    // THEN: Spawn error
    match result {
        Err(EvalError::Spawn { message, .. }) => {
            assert!(message.contains("/nonexistent/pg-sys-shell"));
        }
        other => panic!("Expected spawn error, got {other:?}"),
    }
}
