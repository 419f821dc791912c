//! Conversions between host byte strings and null-terminated buffers.
//!
//! Inputs arrive as [`HostByteString`] (length header, no terminator) and are
//! copied into an [`OwnedBuffer`] before being handed to the OS. Results go the
//! other way: raw bytes are wrapped in a fresh host byte string.

use crate::error::marshal::MarshalError;

use common::ErrorLocation;
use models::{HOST_HEADER_SIZE, HostByteString, OwnedBuffer};

use std::ffi::OsString;
use std::panic::Location;

/// Copy the payload of `source` into a new buffer of `len + 1` bytes ending in `0`.
#[track_caller]
pub fn to_owned_buffer(source: &HostByteString) -> Result<OwnedBuffer, MarshalError> {
    let payload = source.payload();

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(payload.len() + 1)
        .map_err(|e| MarshalError::Allocation {
            message: format!("Failed to allocate {} bytes for owned buffer", payload.len() + 1),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    bytes.extend_from_slice(payload);
    bytes.push(0);

    OwnedBuffer::from_terminated(bytes).map_err(|e| MarshalError::Layout {
        message: String::from("Owned buffer lost its terminator"),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })
}

/// Wrap `bytes` verbatim in a new host byte string.
#[track_caller]
pub fn to_host_byte_string(bytes: &[u8]) -> Result<HostByteString, MarshalError> {
    let total_size = HOST_HEADER_SIZE
        .checked_add(bytes.len())
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(|| MarshalError::TooLarge {
            message: format!(
                "{} bytes do not fit in a host byte string header",
                bytes.len()
            ),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(total_size as usize)
        .map_err(|e| MarshalError::Allocation {
            message: format!("Failed to allocate {total_size} bytes for host byte string"),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    raw.extend_from_slice(&HostByteString::header_for(total_size));
    raw.extend_from_slice(bytes);

    HostByteString::from_raw(raw).map_err(|e| MarshalError::Layout {
        message: String::from("Host byte string header does not match its size"),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })
}

/// The buffer as an OS string, read up to its first NUL byte.
pub fn to_os_string(buffer: &OwnedBuffer) -> OsString {
    let bytes = buffer.as_c_str().to_bytes();

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        std::ffi::OsStr::from_bytes(bytes).to_os_string()
    }

    #[cfg(not(unix))]
    {
        OsString::from(String::from_utf8_lossy(bytes).into_owned())
    }
}
