use crate::helpers::host;

use models::ExitStatus;

use sys_core::SysOps;

// ============================================================================
// Public API tests for exec()
// ============================================================================

/// **VALUE**: Verifies that a succeeding command reports exit status 0.
///
/// **WHY THIS MATTERS**: SQL callers test `sys_exec(...) = 0` to detect success.
///
/// **BUG THIS CATCHES**: Would catch returning a raw wait status or a spawn sentinel
/// for a command that ran fine.
#[cfg(unix)]
#[test]
fn given_true_command_when_exec_called_then_returns_zero() {
    // GIVEN: Default operations
    let ops = SysOps::default();

    // WHEN: Running `true`
    let status = ops.exec(&host("true"));

    // THEN: Success
    assert_eq!(status, ExitStatus::SUCCESS);
}

/// **VALUE**: Verifies that the exit code is reported, not the raw wait status.
///
/// **WHY THIS MATTERS**: C `system()` returns `code << 8` on Unix. Callers expect `1`
/// for `exit 1`, not `256`.
///
/// **BUG THIS CATCHES**: Would catch forwarding `ExitStatusExt::into_raw()`.
#[cfg(unix)]
#[test]
fn given_exit_one_command_when_exec_called_then_returns_one() {
    // GIVEN: Default operations
    let ops = SysOps::default();

    // WHEN: Running a command that exits with 1
    let status = ops.exec(&host("exit 1"));

    // THEN: Exactly 1
    assert_eq!(status.code(), 1);
}

#[cfg(unix)]
#[test]
fn given_unknown_command_when_exec_called_then_returns_non_zero() {
    let ops = SysOps::default();

    let status = ops.exec(&host("pg-sys-definitely-not-a-command-xyz"));

    assert!(!status.is_success());
    assert!(!status.is_spawn_failure(), "The shell itself did start");
    assert_eq!(status.code(), 127);
}

/// **VALUE**: Verifies that shell syntax is passed through unmodified.
///
/// **WHY THIS MATTERS**: exec is a raw passthrough; pipes, redirects and `;` must be
/// interpreted by the shell, not quoted away.
///
/// **BUG THIS CATCHES**: Would catch any escaping of the command string.
#[cfg(unix)]
#[test]
fn given_shell_syntax_when_exec_called_then_shell_interprets_it() {
    // GIVEN: A scratch file target and a command using redirection and `&&`
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.txt");
    let command = format!("printf 'x' > '{}' && exit 7", target.display());

    // WHEN: Running it
    let status = SysOps::default().exec(&host(command));

    // THEN: Both parts ran
    assert_eq!(status.code(), 7);
    assert_eq!(std::fs::read(&target).unwrap(), b"x");
}

/// **VALUE**: Verifies that a missing interpreter yields the spawn failure sentinel.
///
/// **WHY THIS MATTERS**: There is no error channel for exec; -1 is the only signal the
/// host gets when nothing could run at all.
///
/// **BUG THIS CATCHES**: Would catch panicking or returning 127 on spawn failure.
#[test]
fn given_missing_interpreter_when_exec_called_then_returns_spawn_failure() {
    // GIVEN: Operations configured with a nonexistent interpreter
    let mut config = sys_core::SysConfig::default();
    config.interpreter.program = String::from("/nonexistent/pg-sys-shell");
    let ops = SysOps::from_config(&config).unwrap();

    // WHEN: Running anything
    let status = ops.exec(&host("true"));

    // THEN: Sentinel
    assert_eq!(status, ExitStatus::SPAWN_FAILURE);
}
