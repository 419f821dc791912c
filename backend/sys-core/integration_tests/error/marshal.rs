use common::ErrorLocation;

use std::panic::Location;

use sys_core::error::{EvalError, FileReadError, MarshalError};

/// **VALUE**: Verifies marshal errors convert into both operation error types.
///
/// **WHY THIS MATTERS**: eval and read_file use `?` on the marshaler. If the `From`
/// conversions disappear, allocation failures stop compiling into the operation errors.
///
/// **BUG THIS CATCHES**: Would catch removing `#[from]` on the Marshal variants.
#[test]
fn given_marshal_error_when_converted_then_wraps_transparently() {
    // GIVEN: Two TooLarge errors
    let make = || MarshalError::TooLarge {
        message: "payload does not fit".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Converting into operation errors
    let eval: EvalError = make().into();
    let file_read: FileReadError = make().into();

    // THEN: Wrapped without changing the message
    assert!(matches!(eval, EvalError::Marshal(MarshalError::TooLarge { .. })));
    assert!(matches!(
        file_read,
        FileReadError::Marshal(MarshalError::TooLarge { .. })
    ));
    assert!(eval.to_string().starts_with("Too Large Error: payload does not fit"));
}
