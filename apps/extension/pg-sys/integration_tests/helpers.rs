//! Test helpers that play the host's side of the C boundary.

use pg_sys::ffi::sys_free;

use models::HOST_HEADER_SIZE;
use models::HostByteString;

use std::ptr;

/// Raw host byte string for `payload`, as the database would lay it out.
pub fn host_arg(payload: impl AsRef<[u8]>) -> Vec<u8> {
    let payload = payload.as_ref();
    let total = (HOST_HEADER_SIZE + payload.len()) as u32;
    let mut raw = HostByteString::header_for(total).to_vec();
    raw.extend_from_slice(payload);
    raw
}

/// Copy the payload of a returned value and release it.
///
/// Returns `None` for a null result.
pub fn take_result(value: *mut u8) -> Option<Vec<u8>> {
    if value.is_null() {
        return None;
    }

    let mut header = [0u8; HOST_HEADER_SIZE];
    // SAFETY: non-null results start with a header and hold `total` bytes
    let payload = unsafe {
        ptr::copy_nonoverlapping(value, header.as_mut_ptr(), HOST_HEADER_SIZE);
        let total = HostByteString::declared_size(header);
        std::slice::from_raw_parts(value.add(HOST_HEADER_SIZE), total - HOST_HEADER_SIZE).to_vec()
    };

    // SAFETY: `value` came from this library and is freed once
    unsafe { sys_free(value) };
    Some(payload)
}
