use crate::ExitStatus;

#[test]
fn given_zero_code_when_checked_then_is_success() {
    let status = ExitStatus::from(0);

    assert!(status.is_success());
    assert!(!status.is_spawn_failure());
    assert_eq!(status, ExitStatus::SUCCESS);
}

/// **VALUE**: Verifies that the spawn failure sentinel is distinct from real exit codes.
///
/// **WHY THIS MATTERS**: The host only sees an integer. `-1` must stay reserved for
/// "could not start the interpreter" so callers can tell it apart from `exit 1`.
///
/// **BUG THIS CATCHES**: Would catch a change of the sentinel value.
#[test]
fn given_spawn_failure_sentinel_when_checked_then_is_minus_one() {
    // GIVEN: The sentinel
    let status = ExitStatus::SPAWN_FAILURE;

    // WHEN: Converting to the host integer
    let code: i32 = status.into();

    // THEN: Should be -1 and not success
    assert_eq!(code, -1);
    assert!(status.is_spawn_failure());
    assert!(!status.is_success());
}

#[test]
fn given_exit_status_when_displayed_then_shows_raw_code() {
    assert_eq!(ExitStatus(127).to_string(), "127");
    assert_eq!(ExitStatus(-1).to_string(), "-1");
}
