use common::ErrorLocation;

use std::error::Error;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::panic::Location;

use sys_core::error::{CoreError, EvalError, HexError};

/// **VALUE**: Verifies `EvalError::Spawn` includes file/line/column location tracking.
///
/// **WHY THIS MATTERS**: A failed `sys_eval` only leaves a log line behind. Without the
/// location, a spawn failure and a read failure look alike.
///
/// **BUG THIS CATCHES**: Would catch removing location from the Display implementation.
#[test]
#[track_caller]
fn given_spawn_error_when_formatted_then_includes_location() {
    // GIVEN: A Spawn error with location
    let io_err = IoError::new(ErrorKind::NotFound, "interpreter not found");
    let err = EvalError::Spawn {
        message: "Failed to spawn interpreter /bin/sh".to_string(),
        location: ErrorLocation::from(Location::caller()),
        source: io_err,
    };

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, message, and file location
    assert!(error_string.contains("Spawn Error"));
    assert!(error_string.contains("Failed to spawn interpreter /bin/sh"));
    assert!(error_string.contains("eval.rs"));
}

/// **VALUE**: Verifies the I/O cause is reachable through `source()`.
///
/// **WHY THIS MATTERS**: The error kind (NotFound vs PermissionDenied) tells an operator
/// whether to fix the path or the permissions.
///
/// **BUG THIS CATCHES**: Would catch dropping the `#[source]` attribute.
#[test]
fn given_read_error_when_source_requested_then_returns_io_error() {
    // GIVEN: A Read error wrapping an I/O error
    let err = EvalError::Read {
        message: "Failed to read command output".to_string(),
        location: ErrorLocation::from(Location::caller()),
        source: IoError::new(ErrorKind::BrokenPipe, "pipe closed"),
    };

    // WHEN: Getting the source
    let source = err.source();

    // THEN: The I/O error is exposed
    let source = source.expect("Read error should expose its source");
    assert!(source.to_string().contains("pipe closed"));
}

#[test]
fn given_pipe_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = EvalError::Pipe {
        message: "Child process has no stdout".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
    assert!(expected.starts_with("Pipe Error: Child process has no stdout ["));
}

#[test]
fn given_hex_error_when_converted_then_wraps_transparently() {
    let err = HexError::Encoding {
        message: "Failed to encode 3 bytes".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let eval: EvalError = err.into();

    assert!(matches!(eval, EvalError::Hex(HexError::Encoding { .. })));
    assert_eq!(eval.to_string(), expected);
    assert!(expected.starts_with("Encoding Error: Failed to encode 3 bytes ["));
}
