// Unit tests for eval's chunked reader and trailing separator handling

use crate::eval::{read_line_chunks, trim_trailing_separator};

use std::io::{BufReader, Cursor};

/// **VALUE**: Verifies chunks stop at newlines and at the chunk size.
///
/// **WHY THIS MATTERS**: The chunk size bounds each read; if it is ignored a single
/// newline-free stream is read in one unbounded call.
///
/// **BUG THIS CATCHES**: Would catch dropping the `take(chunk_size)` limit.
#[test]
fn given_long_line_when_reading_chunks_then_splits_at_chunk_size() {
    // GIVEN: A 10-byte line with chunk size 4
    let reader = BufReader::new(Cursor::new(b"abcdefghi\n".to_vec()));
    let mut output = Vec::new();

    // WHEN: Reading
    let chunks = read_line_chunks(reader, 4, &mut output).unwrap();

    // THEN: 4 + 4 + 2 bytes, everything preserved
    assert_eq!(chunks, 3);
    assert_eq!(output, b"abcdefghi\n");
}

#[test]
fn given_multiple_lines_when_reading_chunks_then_one_chunk_per_line() {
    let reader = BufReader::new(Cursor::new(b"a\nbb\nccc\n".to_vec()));
    let mut output = Vec::new();

    let chunks = read_line_chunks(reader, 1024, &mut output).unwrap();

    assert_eq!(chunks, 3);
    assert_eq!(output, b"a\nbb\nccc\n");
}

#[test]
fn given_empty_stream_when_reading_chunks_then_reads_nothing() {
    let reader = BufReader::new(Cursor::new(Vec::new()));
    let mut output = Vec::new();

    let chunks = read_line_chunks(reader, 8, &mut output).unwrap();

    assert_eq!(chunks, 0);
    assert!(output.is_empty());
}

/// **VALUE**: Verifies exactly one trailing newline is dropped.
///
/// **WHY THIS MATTERS**: `echo abc` should come back as `abc`; blank lines inside or at
/// the end of output beyond the last separator are content and must survive.
///
/// **BUG THIS CATCHES**: Would catch `trim_end()`-style stripping of all newlines.
#[test]
fn given_output_with_two_trailing_newlines_when_trimmed_then_drops_only_one() {
    // GIVEN: "abc\n\n"
    let mut output = b"abc\n\n".to_vec();

    // WHEN: Trimming
    let trimmed = trim_trailing_separator(&mut output);

    // THEN: One newline remains
    assert!(trimmed);
    assert_eq!(output, b"abc\n");
}

#[test]
fn given_output_without_trailing_newline_when_trimmed_then_keeps_all_bytes() {
    let mut output = b"abc".to_vec();

    assert!(!trim_trailing_separator(&mut output));
    assert_eq!(output, b"abc");
}

#[test]
fn given_empty_output_when_trimmed_then_stays_empty() {
    let mut output = Vec::new();

    assert!(!trim_trailing_separator(&mut output));
    assert!(output.is_empty());
}
