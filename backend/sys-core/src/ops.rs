//! Entry point for the three system operations.
//!
//! [`SysOps`] carries the resolved configuration; the operations themselves are
//! implemented in [`crate::exec`], [`crate::eval`] and [`crate::file_read`].

use crate::config::{DEFAULT_CHUNK_SIZE, SysConfig};
use crate::error::config::ConfigError;

use common::RedactedText;
use models::{Interpreter, OwnedBuffer};

use log::{debug, info};

#[derive(Debug, Clone)]
pub struct SysOps {
    pub(crate) interpreter: Interpreter,
    pub(crate) chunk_size: usize,
    pub(crate) log_commands: bool,
}

impl SysOps {
    /// Resolve a configuration into runnable operations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the configuration is invalid.
    pub fn from_config(config: &SysConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            interpreter: config.interpreter()?,
            chunk_size: config.eval.chunk_size,
            log_commands: config.logging.log_commands,
        })
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn log_commands(&self) -> bool {
        self.log_commands
    }

    /// Log the command or path an operation is about to use.
    pub(crate) fn log_request(&self, action: &str, buffer: &OwnedBuffer) {
        let text = RedactedText::from_bytes(buffer.as_c_str().to_bytes());

        if self.log_commands {
            info!("{action}: {}", text.reveal());
        } else {
            debug!("{action}: {text}");
        }
    }
}

impl Default for SysOps {
    fn default() -> Self {
        Self {
            interpreter: Interpreter::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_commands: false,
        }
    }
}
