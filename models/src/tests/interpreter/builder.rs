use crate::{InterpreterBuilder, ModelError};

/// **VALUE**: Verifies that a fully specified builder produces the interpreter.
///
/// **WHY THIS MATTERS**: Every `exec`/`eval` call goes through the interpreter built
/// here. If program or flag get swapped, every command fails with a confusing error.
///
/// **BUG THIS CATCHES**: Would catch field mix-ups in `build()`.
#[test]
fn given_program_and_flag_when_building_then_returns_interpreter() {
    // GIVEN: Builder with program and flag
    let builder = InterpreterBuilder::default()
        .with_program("/bin/sh")
        .with_flag("-c");

    // WHEN: Building
    let interpreter = builder.build().unwrap();

    // THEN: Fields are preserved
    assert_eq!(interpreter.program(), "/bin/sh");
    assert_eq!(interpreter.flag(), "-c");
}

/// **VALUE**: Verifies that a missing program is rejected.
///
/// **WHY THIS MATTERS**: Spawning an empty program name fails at call time inside the
/// database backend, far from the configuration mistake that caused it.
///
/// **BUG THIS CATCHES**: Would catch if required field validation is removed.
#[test]
fn given_missing_program_when_building_then_returns_validation_error() {
    // GIVEN: Builder without program
    let builder = InterpreterBuilder::default().with_flag("-c");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Interpreter program is required");
        }
    }
}

/// **VALUE**: Verifies that a whitespace-only program is rejected.
///
/// **WHY THIS MATTERS**: A blank program in the JSON config must be caught on load.
///
/// **BUG THIS CATCHES**: Would catch a plain `is_empty()` check missing blank input.
#[test]
fn given_blank_program_when_building_then_returns_validation_error() {
    // GIVEN: Builder with a blank program
    let builder = InterpreterBuilder::default()
        .with_program("   ")
        .with_flag("-c");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Interpreter program cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that a missing or empty flag is rejected.
///
/// **WHY THIS MATTERS**: Without `-c` (or `/C`), the shell would treat the command as
/// a script path and silently do something else.
///
/// **BUG THIS CATCHES**: Would catch if the flag check is dropped.
#[test]
fn given_empty_flag_when_building_then_returns_validation_error() {
    // GIVEN: Builders with missing and empty flags
    let missing = InterpreterBuilder::default().with_program("/bin/sh");
    let empty = InterpreterBuilder::default()
        .with_program("/bin/sh")
        .with_flag("");

    // WHEN: Attempting to build
    // THEN: Both fail
    assert!(missing.build().is_err());
    match empty.build().unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Interpreter flag cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that NUL bytes in the interpreter are rejected.
///
/// **WHY THIS MATTERS**: The OS cannot spawn a program whose name contains NUL.
///
/// **BUG THIS CATCHES**: Would catch if the NUL check is removed.
#[test]
fn given_nul_in_program_when_building_then_returns_validation_error() {
    // GIVEN: Program containing a NUL byte
    let builder = InterpreterBuilder::default()
        .with_program("/bin/sh\0x")
        .with_flag("-c");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    assert!(result.is_err());
}

#[test]
fn given_default_interpreter_when_inspected_then_uses_platform_shell() {
    let interpreter = crate::Interpreter::default();

    assert_eq!(interpreter.program(), crate::interpreter::DEFAULT_PROGRAM);
    assert_eq!(interpreter.flag(), crate::interpreter::DEFAULT_FLAG);
}
