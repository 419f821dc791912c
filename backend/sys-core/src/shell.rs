use models::{ExitStatus, Interpreter};

use std::ffi::OsStr;
use std::process::{Command, ExitStatus as ProcessExitStatus};

/// `<program> <flag> <command>`, with the command passed through untouched.
pub(crate) fn build_shell_command(interpreter: &Interpreter, command: &OsStr) -> Command {
    let mut cmd = Command::new(interpreter.program());
    cmd.arg(interpreter.flag());
    append_command_line(&mut cmd, command);
    cmd
}

#[cfg(windows)]
fn append_command_line(cmd: &mut Command, command: &OsStr) {
    use std::os::windows::process::CommandExt;
    // cmd.exe parses its own command line; argv quoting would change its meaning
    cmd.raw_arg(command);
}

#[cfg(not(windows))]
fn append_command_line(cmd: &mut Command, command: &OsStr) {
    cmd.arg(command);
}

/// Exit code as a shell would report it. A child killed by a signal maps to
/// `128 + signal`.
pub(crate) fn exit_status_from(status: ProcessExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        return ExitStatus(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitStatus(128 + signal);
        }
    }

    ExitStatus::SPAWN_FAILURE
}
