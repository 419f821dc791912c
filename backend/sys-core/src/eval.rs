//! Run a command and capture its standard output as hex text.

use crate::error::eval::EvalError;
use crate::hex::{HexText, try_encode};
use crate::marshal::{to_os_string, to_owned_buffer};
use crate::ops::SysOps;
use crate::shell::{build_shell_command, exit_status_from};

use common::ErrorLocation;
use models::HostByteString;

use std::io::{BufRead, BufReader, Read, Result as IoResult};
use std::panic::Location;
use std::process::Stdio;

use log::{debug, trace};

const LINE_SEPARATOR: u8 = b'\n';

impl SysOps {
    /// Run `command`, read everything it writes to stdout, and return it hex-encoded.
    ///
    /// Output is read in line chunks of at most `chunk_size` bytes. One trailing
    /// newline is dropped before encoding. A command that prints nothing yields an
    /// empty [`HexText`]. Stdin and stderr are inherited.
    ///
    /// # Errors
    ///
    /// * [`EvalError::Spawn`] - the interpreter could not be started
    /// * [`EvalError::Pipe`] - the child has no readable stdout
    /// * [`EvalError::Read`] - reading the pipe failed
    /// * [`EvalError::Wait`] - the child could not be reaped
    /// * [`EvalError::Hex`] - the output could not be encoded
    #[track_caller]
    pub fn eval(&self, command: &HostByteString) -> Result<HexText, EvalError> {
        let buffer = to_owned_buffer(command)?;

        self.log_request("Command evaluated", &buffer);

        let mut child = build_shell_command(&self.interpreter, &to_os_string(&buffer))
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| EvalError::Spawn {
                message: format!(
                    "Failed to spawn interpreter {}: {e}",
                    self.interpreter.program()
                ),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        let mut output = Vec::new();

        // The read end is closed before waiting, so a child still writing gets
        // EPIPE instead of blocking forever.
        let drained = match child.stdout.take() {
            Some(stdout) => {
                let reader = BufReader::with_capacity(self.chunk_size, stdout);
                read_line_chunks(reader, self.chunk_size, &mut output).map_err(|e| {
                    EvalError::Read {
                        message: format!("Failed to read command output: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                        source: e,
                    }
                })
            }
            None => Err(EvalError::Pipe {
                message: String::from("Child process has no stdout"),
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        let waited = child.wait();

        let chunks = drained?;
        let status = waited.map_err(|e| EvalError::Wait {
            message: format!("Failed to wait for command: {e}"),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        trace!(
            "Read {} bytes in {chunks} chunks, exit status {}",
            output.len(),
            exit_status_from(status)
        );

        if trim_trailing_separator(&mut output) {
            trace!("Dropped trailing line separator");
        }

        let text = try_encode(&output)?;

        debug!("Command output encoded ({} bytes)", text.source_len());
        Ok(text)
    }
}

/// Append line chunks from `reader` to `output` until end of stream.
///
/// Each chunk ends at a newline or after `chunk_size` bytes, whichever comes
/// first. Returns the number of chunks read.
pub(crate) fn read_line_chunks<R: BufRead>(
    mut reader: R,
    chunk_size: usize,
    output: &mut Vec<u8>,
) -> IoResult<usize> {
    let mut chunks = 0;

    loop {
        let read = reader
            .by_ref()
            .take(chunk_size as u64)
            .read_until(LINE_SEPARATOR, output)?;

        if read == 0 {
            return Ok(chunks);
        }

        chunks += 1;
    }
}

/// Drop one trailing newline. Returns whether a byte was removed.
pub(crate) fn trim_trailing_separator(output: &mut Vec<u8>) -> bool {
    if output.last() == Some(&LINE_SEPARATOR) {
        output.pop();
        return true;
    }

    false
}
