//! Shared helpers for sys-core integration tests.

use models::HostByteString;

use sys_core::marshal::to_host_byte_string;

/// Wrap `text` as the host would pass it in.
pub fn host(text: impl AsRef<[u8]>) -> HostByteString {
    to_host_byte_string(text.as_ref()).expect("test input fits in a host byte string")
}
