use common::ErrorLocation;

use sys_core::error::CoreError;
use thiserror::Error;

/// Errors raised while setting up the extension.
///
/// The C entry points never return these; they are logged and collapsed into the
/// host's sentinel values.
#[derive(Debug, Error)]
pub enum PgSysError {
    /// Logger could not be installed
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Invalid argument received over the C ABI
    #[error("Argument Error: {message} {location}")]
    Argument {
        message: String,
        location: ErrorLocation,
    },

    /// Error from sys-core (configuration, marshaling, operations)
    #[error(transparent)]
    Core(#[from] CoreError),
}
