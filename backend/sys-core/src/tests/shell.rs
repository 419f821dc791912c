// Unit tests for interpreter command construction

use crate::shell::{build_shell_command, exit_status_from};

use models::{ExitStatus, Interpreter, InterpreterBuilder};

use std::ffi::OsStr;

/// **VALUE**: Verifies the command is built as `<program> <flag> <command>`.
///
/// **WHY THIS MATTERS**: If the flag is dropped, a POSIX shell treats the command as a
/// script path and fails with a misleading "No such file" error.
///
/// **BUG THIS CATCHES**: Would catch argument order or missing flag regressions.
#[test]
fn given_interpreter_when_building_command_then_passes_flag_then_command() {
    // GIVEN: A custom interpreter
    let interpreter = InterpreterBuilder::default()
        .with_program("/usr/bin/env")
        .with_flag("-S")
        .build()
        .unwrap();

    // WHEN: Building the command
    let cmd = build_shell_command(&interpreter, OsStr::new("echo 'a b'"));

    // THEN: Program and arguments line up
    assert_eq!(cmd.get_program(), "/usr/bin/env");
    let args: Vec<&OsStr> = cmd.get_args().collect();
    assert_eq!(args.first().copied(), Some(OsStr::new("-S")));
    assert_eq!(args.len(), 2);
}

#[cfg(unix)]
#[test]
fn given_default_interpreter_when_building_command_then_uses_bin_sh() {
    let cmd = build_shell_command(&Interpreter::default(), OsStr::new("true"));

    assert_eq!(cmd.get_program(), "/bin/sh");
    let args: Vec<&OsStr> = cmd.get_args().collect();
    assert_eq!(args, vec![OsStr::new("-c"), OsStr::new("true")]);
}

/// **VALUE**: Verifies that a signal-terminated child maps to `128 + signal`.
///
/// **WHY THIS MATTERS**: A killed command has no exit code. Reporting 0 would tell the
/// host it succeeded; reporting -1 would look like a spawn failure.
///
/// **BUG THIS CATCHES**: Would catch dropping the signal branch.
#[cfg(unix)]
#[test]
fn given_signal_terminated_status_when_converted_then_returns_128_plus_signal() {
    use std::os::unix::process::ExitStatusExt;

    // GIVEN: A raw wait status for SIGKILL (9)
    let status = std::process::ExitStatus::from_raw(9);

    // WHEN: Converting
    let converted = exit_status_from(status);

    // THEN: Shell convention
    assert_eq!(converted, ExitStatus(137));
}

#[cfg(unix)]
#[test]
fn given_exit_code_status_when_converted_then_returns_code() {
    use std::os::unix::process::ExitStatusExt;

    // exit(3) is encoded as 3 << 8 in a wait status
    let status = std::process::ExitStatus::from_raw(3 << 8);

    assert_eq!(exit_status_from(status), ExitStatus(3));
}
