//! Run a command through the interpreter and report its exit status.

use crate::marshal::{to_os_string, to_owned_buffer};
use crate::ops::SysOps;
use crate::shell::{build_shell_command, exit_status_from};

use models::{ExitStatus, HostByteString};

use log::{debug, error, warn};

impl SysOps {
    /// Run `command` and block until it exits.
    ///
    /// Standard streams are inherited from the calling process. There is no error
    /// channel: if the interpreter cannot be started (or the command cannot be
    /// copied out of the host value), [`ExitStatus::SPAWN_FAILURE`] is returned.
    pub fn exec(&self, command: &HostByteString) -> ExitStatus {
        let buffer = match to_owned_buffer(command) {
            Ok(buffer) => buffer,
            Err(e) => {
                error!("Command execution aborted: {e}");
                return ExitStatus::SPAWN_FAILURE;
            }
        };

        self.log_request("Command execution", &buffer);

        let status = match build_shell_command(&self.interpreter, &to_os_string(&buffer)).status()
        {
            Ok(status) => exit_status_from(status),
            Err(e) => {
                warn!(
                    "Failed to spawn interpreter {}: {e}",
                    self.interpreter.program()
                );
                ExitStatus::SPAWN_FAILURE
            }
        };

        debug!("Command exited with status {status}");
        status
    }
}
