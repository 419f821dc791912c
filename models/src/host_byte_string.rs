//! The host's length-prefixed byte string.
//!
//! Layout: a 4-byte native-endian header holding the total size (header included),
//! followed by the payload. There is no terminator.

use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;

/// Size of the length header in front of every host byte string.
pub const HOST_HEADER_SIZE: usize = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct HostByteString {
    raw: Vec<u8>,
}

impl HostByteString {
    /// Wrap a raw host value, checking that its header matches its size.
    #[track_caller]
    pub fn from_raw(raw: Vec<u8>) -> Result<Self, ModelError> {
        let Some(prefix) = raw.first_chunk::<HOST_HEADER_SIZE>() else {
            return Err(ModelError::Validation {
                message: format!(
                    "Host byte string is {} bytes, shorter than its {HOST_HEADER_SIZE}-byte header",
                    raw.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let declared = Self::declared_size(*prefix);
        if declared != raw.len() {
            return Err(ModelError::Validation {
                message: format!(
                    "Host byte string header declares {declared} bytes but {} are present",
                    raw.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { raw })
    }

    /// Total size (header included) declared by a header.
    pub fn declared_size(header: [u8; HOST_HEADER_SIZE]) -> usize {
        u32::from_ne_bytes(header) as usize
    }

    /// Header bytes for a value of `total_size` bytes (header included).
    pub fn header_for(total_size: u32) -> [u8; HOST_HEADER_SIZE] {
        total_size.to_ne_bytes()
    }

    /// Payload bytes, without the header.
    pub fn payload(&self) -> &[u8] {
        &self.raw[HOST_HEADER_SIZE..]
    }

    /// Payload length.
    pub fn len(&self) -> usize {
        self.raw.len() - HOST_HEADER_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header and payload exactly as handed to the host.
    pub fn as_raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }
}

impl fmt::Debug for HostByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostByteString")
            .field("len", &self.len())
            .finish()
    }
}
