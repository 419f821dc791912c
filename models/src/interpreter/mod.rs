pub mod builder;

use serde::Serialize;

/// Platform command interpreter.
#[cfg(windows)]
pub const DEFAULT_PROGRAM: &str = "cmd";
#[cfg(windows)]
pub const DEFAULT_FLAG: &str = "/C";

#[cfg(not(windows))]
pub const DEFAULT_PROGRAM: &str = "/bin/sh";
#[cfg(not(windows))]
pub const DEFAULT_FLAG: &str = "-c";

/// Command interpreter that `exec` and `eval` hand commands to,
/// invoked as `<program> <flag> <command>`.
///
/// Build through [`builder::InterpreterBuilder`] to get a validated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpreter {
    pub(crate) program: String,
    pub(crate) flag: String,
}

impl Interpreter {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            flag: DEFAULT_FLAG.to_string(),
        }
    }
}
