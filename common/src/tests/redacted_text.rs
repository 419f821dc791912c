use crate::RedactedText;

/// **VALUE**: Verifies that Debug output never contains the wrapped command.
///
/// **WHY THIS MATTERS**: Commands are logged with `{:?}` in several places. A command
/// such as `PGPASSWORD=hunter2 pg_dump` must not end up in the database server log.
///
/// **BUG THIS CATCHES**: Would catch a `#[derive(Debug)]` replacing the manual impl.
#[test]
fn given_secret_command_when_debug_formatted_then_content_is_hidden() {
    // GIVEN: A command carrying a secret
    let text = RedactedText::new("PGPASSWORD=hunter2 pg_dump");

    // WHEN: Formatting with Debug
    let debug = format!("{:?}", text);

    // THEN: The secret is absent
    assert!(!debug.contains("hunter2"));
    assert_eq!(debug, "RedactedText([REDACTED])");
}

/// **VALUE**: Verifies that Display reports only the byte length.
///
/// **WHY THIS MATTERS**: The length is the only detail that is safe to log and still
/// useful when correlating calls.
///
/// **BUG THIS CATCHES**: Would catch Display leaking content or losing the length.
#[test]
fn given_text_when_displayed_then_shows_length_only() {
    // GIVEN: A short command
    let text = RedactedText::new("id -u");

    // WHEN: Formatting with Display
    let shown = text.to_string();

    // THEN: Only the length is visible
    assert_eq!(shown, "[REDACTED 5 bytes]");
}

/// **VALUE**: Verifies that invalid UTF-8 from the host is accepted lossily.
///
/// **WHY THIS MATTERS**: Host byte strings carry arbitrary bytes; building the log
/// wrapper must never fail or panic on them.
///
/// **BUG THIS CATCHES**: Would catch a strict `String::from_utf8(..).unwrap()`.
#[test]
fn given_invalid_utf8_when_built_from_bytes_then_replaces_invalid_sequences() {
    // GIVEN: Bytes that are not valid UTF-8
    let bytes = [b'l', b's', b' ', 0xFF, 0xFE];

    // WHEN: Building the wrapper
    let text = RedactedText::from_bytes(&bytes);

    // THEN: The valid prefix survives and nothing panics
    assert!(text.reveal().starts_with("ls "));
    assert!(!text.is_empty());
}

/// **VALUE**: Verifies that serialization is refused.
///
/// **WHY THIS MATTERS**: Serializing a command into JSON (for example inside an error
/// payload) would bypass the redaction entirely.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` replacing the refusing impl.
#[test]
fn given_text_when_serialized_then_returns_error() {
    // GIVEN: A wrapped command
    let text = RedactedText::new("cat /etc/shadow");

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&text);

    // THEN: Serialization fails with an explanatory message
    let err = result.unwrap_err().to_string();
    assert!(err.contains("cannot be serialized"));
}
