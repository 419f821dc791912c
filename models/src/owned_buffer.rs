//! Null-terminated buffer owned by a single operation.

use crate::{ErrorLocation, ModelError};

use std::ffi::CStr;
use std::fmt;
use std::panic::Location;

/// Heap buffer whose last byte is always `0`.
///
/// Released when dropped, so every exit path of an operation frees it.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnedBuffer {
    bytes: Vec<u8>,
}

impl OwnedBuffer {
    /// Take ownership of `bytes`, which must end with a terminator.
    #[track_caller]
    pub fn from_terminated(bytes: Vec<u8>) -> Result<Self, ModelError> {
        if bytes.last() != Some(&0) {
            return Err(ModelError::Validation {
                message: String::from("Owned buffer must end with a null terminator"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { bytes })
    }

    /// Length including the terminator.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a buffer holds at least its terminator.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bytes before the terminator.
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// The buffer read as a C string, which ends at the first NUL byte.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }
}

impl fmt::Debug for OwnedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}
