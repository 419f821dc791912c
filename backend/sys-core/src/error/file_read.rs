use crate::error::marshal::MarshalError;

use common::ErrorLocation;

use std::io::Error as IoError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FileReadError {
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error("Seek Error: {message} {location}")]
    Seek {
        message: String,
        location: ErrorLocation,
        #[source]
        source: IoError,
    },

    #[error("Read Error: {message} {location}")]
    Read {
        message: String,
        location: ErrorLocation,
        #[source]
        source: IoError,
    },

    #[error("Short Read Error: expected {expected} bytes, read {actual} {location}")]
    ShortRead {
        expected: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("Too Large Error: {message} {location}")]
    TooLarge {
        message: String,
        location: ErrorLocation,
    },
}
