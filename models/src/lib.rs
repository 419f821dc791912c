//! Data structures exchanged between the database host and the system operations.
//!
//! Models carry their own structural invariants (header sizes, terminators,
//! non-empty interpreter names) but no behavior beyond that. Conversions between
//! them live in `sys-core`.

pub mod error;
pub mod exit_status;
pub mod host_byte_string;
pub mod interpreter;
pub mod owned_buffer;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use exit_status::ExitStatus;
pub use host_byte_string::{HOST_HEADER_SIZE, HostByteString};
pub use interpreter::Interpreter;
pub use interpreter::builder::InterpreterBuilder;
pub use owned_buffer::OwnedBuffer;
