use common::ErrorLocation;

use std::panic::Location;

use sys_core::error::FileReadError;

/// **VALUE**: Verifies the short read error reports both byte counts.
///
/// **WHY THIS MATTERS**: A file truncated while being read must be distinguishable from
/// an I/O failure, and the counts show how much was lost.
///
/// **BUG THIS CATCHES**: Would catch a Display format that drops expected or actual.
#[test]
#[track_caller]
fn given_short_read_error_when_formatted_then_includes_counts_and_location() {
    // GIVEN: A short read of 3 out of 10 bytes
    let err = FileReadError::ShortRead {
        expected: 10,
        actual: 3,
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let error_string = err.to_string();

    // THEN: Both counts and the location appear
    assert!(error_string.contains("Short Read Error"));
    assert!(error_string.contains("expected 10 bytes, read 3"));
    assert!(error_string.contains("file_read.rs"));
}

#[test]
fn given_too_large_error_when_formatted_then_includes_message() {
    let err = FileReadError::TooLarge {
        message: "File of 99 bytes exceeds the address space".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(err.to_string().starts_with("Too Large Error: File of 99 bytes"));
}
