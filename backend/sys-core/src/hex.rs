//! Uppercase hexadecimal encoding of raw output.

use crate::error::hex::HexError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;

/// Bytes encoded as uppercase hex digit pairs, high nibble first.
///
/// Always twice as long as the bytes it encodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexText(String);

impl HexText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bytes this text encodes.
    pub fn source_len(&self) -> usize {
        self.0.len() / 2
    }
}

impl fmt::Display for HexText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn encode(bytes: &[u8]) -> HexText {
    HexText(::hex::encode_upper(bytes))
}

/// Like [`encode`], but reports allocation failure instead of aborting.
///
/// # Errors
///
/// * [`HexError::Allocation`] - the digits do not fit in memory
/// * [`HexError::Encoding`] - the digit buffer could not be filled
#[track_caller]
pub fn try_encode(bytes: &[u8]) -> Result<HexText, HexError> {
    let width = bytes.len().saturating_mul(2);

    let mut digits = Vec::new();
    digits
        .try_reserve_exact(width)
        .map_err(|e| HexError::Allocation {
            message: format!("Failed to allocate hex text for {} bytes", bytes.len()),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;
    digits.resize(width, 0);

    ::hex::encode_to_slice(bytes, &mut digits).map_err(|e| HexError::Encoding {
        message: format!("Failed to encode {} bytes: {e}", bytes.len()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    digits.make_ascii_uppercase();

    String::from_utf8(digits)
        .map(HexText)
        .map_err(|e| HexError::Encoding {
            message: format!("Hex digits are not valid UTF-8: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
