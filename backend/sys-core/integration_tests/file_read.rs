use crate::helpers::host;

use sys_core::SysOps;
use sys_core::hex::encode;

use std::fs;

// ============================================================================
// Public API tests for read_file()
// ============================================================================

/// **VALUE**: Verifies a missing file yields `None` (NULL at the host), not an error.
///
/// **WHY THIS MATTERS**: Probing for files is the main use of `sys_fileread`; a missing
/// file is an expected answer, not a failure to report.
///
/// **BUG THIS CATCHES**: Would catch propagating the open error.
#[test]
fn given_missing_file_when_read_file_called_then_returns_none() {
    // GIVEN: A path inside an empty temp dir
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    // WHEN: Reading
    let result = SysOps::default().read_file(&host(path.to_string_lossy().as_bytes()));

    // THEN: None
    assert!(result.unwrap().is_none());
}

/// **VALUE**: Verifies file content is returned exactly, hex-encoded.
///
/// **WHY THIS MATTERS**: Unlike eval, no trailing byte is trimmed; the file content is
/// returned as-is, including its final newline.
///
/// **BUG THIS CATCHES**: Would catch applying eval's trim to file content.
#[test]
fn given_file_with_content_when_read_file_called_then_returns_encoded_content() {
    // GIVEN: A file with binary content and a trailing newline
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let content = b"root:x:0:0\n\0\xff";
    fs::write(&path, content).unwrap();

    // WHEN: Reading
    let text = SysOps::default()
        .read_file(&host(path.to_string_lossy().as_bytes()))
        .unwrap()
        .unwrap();

    // THEN: Exact encoding
    assert_eq!(text, encode(content));
}

#[test]
fn given_empty_file_when_read_file_called_then_returns_empty_text() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let text = SysOps::default()
        .read_file(&host(file.path().to_string_lossy().as_bytes()))
        .unwrap()
        .unwrap();

    assert!(text.is_empty());
}

/// **VALUE**: Verifies repeated reads of an unchanged file are identical.
///
/// **WHY THIS MATTERS**: Leaked file positions or reused buffers between calls would
/// make the second read differ.
///
/// **BUG THIS CATCHES**: Would catch state carried between invocations.
#[test]
fn given_unchanged_file_when_read_twice_then_results_are_identical() {
    // GIVEN: A file larger than a typical buffer
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let content: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).unwrap();
    let ops = SysOps::default();
    let input = host(path.to_string_lossy().as_bytes());

    // WHEN: Reading twice
    let first = ops.read_file(&input).unwrap().unwrap();
    let second = ops.read_file(&input).unwrap().unwrap();

    // THEN: Identical and correct
    assert_eq!(first, second);
    assert_eq!(first.source_len(), content.len());
    assert_eq!(first, encode(&content));
}

#[cfg(unix)]
#[test]
fn given_directory_path_when_read_file_called_then_returns_none() {
    let dir = tempfile::tempdir().unwrap();

    let result = SysOps::default().read_file(&host(dir.path().to_string_lossy().as_bytes()));

    assert!(result.unwrap().is_none());
}
