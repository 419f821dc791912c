//! Shared building blocks for the pg-sys workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking and log-safe text wrappers
//! - **models**: host-facing data structures (byte strings, buffers, exit codes)
//! - **sys-core**: marshaling, hex encoding and the three system operations
//! - **pg-sys**: C ABI surface loaded by the database engine

pub mod error;
pub mod redacted_text;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use redacted_text::RedactedText;
