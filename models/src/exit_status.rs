//! Process termination codes returned to the host.

use serde::Serialize;

/// Exit code of a command, in the operating system's convention.
///
/// Stored exactly as reported, never reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Returned when the interpreter process could not be created at all.
    pub const SPAWN_FAILURE: ExitStatus = ExitStatus(-1);

    #[inline]
    pub fn code(&self) -> i32 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }

    pub fn is_spawn_failure(&self) -> bool {
        *self == Self::SPAWN_FAILURE
    }
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        ExitStatus(code)
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> Self {
        status.0
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
