// Unit tests for the buffer marshaler

use crate::marshal::{to_host_byte_string, to_os_string, to_owned_buffer};

use models::HOST_HEADER_SIZE;

/// **VALUE**: Verifies the owned buffer is the payload plus exactly one terminator.
///
/// **WHY THIS MATTERS**: The buffer is what the interpreter receives. A missing
/// terminator or a copied header byte changes the command that runs.
///
/// **BUG THIS CATCHES**: Would catch off-by-one sizing or copying the header.
#[test]
fn given_host_byte_string_when_marshaled_then_buffer_is_payload_plus_terminator() {
    // GIVEN: A host value holding "echo hi"
    let source = to_host_byte_string(b"echo hi").unwrap();

    // WHEN: Converting to an owned buffer
    let buffer = to_owned_buffer(&source).unwrap();

    // THEN: len + 1 bytes, same content, trailing zero
    assert_eq!(buffer.len(), source.len() + 1);
    assert_eq!(buffer.content(), source.payload());
    assert_eq!(buffer.as_bytes_with_nul().last(), Some(&0));
}

#[test]
fn given_empty_host_byte_string_when_marshaled_then_buffer_is_terminator_only() {
    let source = to_host_byte_string(b"").unwrap();

    let buffer = to_owned_buffer(&source).unwrap();

    assert_eq!(buffer.as_bytes_with_nul(), b"\0");
}

/// **VALUE**: Verifies the host value carries a correct header and verbatim bytes.
///
/// **WHY THIS MATTERS**: The host reads the header to know how much to copy. A header
/// that omits its own size truncates every result by four bytes.
///
/// **BUG THIS CATCHES**: Would catch writing the payload length instead of the total.
#[test]
fn given_binary_bytes_when_wrapped_then_header_counts_itself() {
    // GIVEN: Non-printable bytes
    let bytes = [0u8, 1, 2, 0xFF];

    // WHEN: Wrapping for the host
    let value = to_host_byte_string(&bytes).unwrap();

    // THEN: Header holds header + payload, payload is verbatim
    let raw = value.as_raw();
    let header: [u8; HOST_HEADER_SIZE] = raw[..HOST_HEADER_SIZE].try_into().unwrap();
    assert_eq!(u32::from_ne_bytes(header) as usize, HOST_HEADER_SIZE + 4);
    assert_eq!(value.payload(), &bytes);
}

/// **VALUE**: Verifies the OS string view stops at an embedded NUL.
///
/// **WHY THIS MATTERS**: Commands are C strings to the interpreter. Passing bytes past
/// a NUL would fail at spawn time instead of running the prefix.
///
/// **BUG THIS CATCHES**: Would catch using `content()` instead of the C string view.
#[test]
fn given_embedded_nul_when_converted_to_os_string_then_truncates() {
    // GIVEN: "true\0false"
    let source = to_host_byte_string(b"true\0false").unwrap();
    let buffer = to_owned_buffer(&source).unwrap();

    // WHEN: Converting
    let os = to_os_string(&buffer);

    // THEN: Only "true" remains
    assert_eq!(os, "true");
}
