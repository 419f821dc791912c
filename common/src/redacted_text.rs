//! Command and path text with redacted Debug and Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// Text that never exposes its value in logs or debug output.
///
/// Shell commands routinely carry credentials (`PGPASSWORD=... psql`, `curl -u`),
/// so everything the operations log goes through this wrapper unless verbatim
/// command logging has been switched on.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedText {
    inner: String,
}

impl RedactedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { inner: text.into() }
    }

    /// Build from raw host bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            inner: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Get the actual text.
    ///
    /// # Security Note
    /// Only call this when the caller has opted into verbatim logging.
    #[inline]
    pub fn reveal(&self) -> &str {
        &self.inner
    }

    /// Length in bytes (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedText([REDACTED])")
    }
}

impl fmt::Display for RedactedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

impl Drop for RedactedText {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedText {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedText cannot be serialized - use reveal() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
