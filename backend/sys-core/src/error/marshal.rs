use common::ErrorLocation;

use std::collections::TryReserveError;

use models::ModelError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MarshalError {
    #[error("Allocation Error: {message} {location}")]
    Allocation {
        message: String,
        location: ErrorLocation,
        #[source]
        source: TryReserveError,
    },

    #[error("Too Large Error: {message} {location}")]
    TooLarge {
        message: String,
        location: ErrorLocation,
    },

    #[error("Layout Error: {message} {location}")]
    Layout {
        message: String,
        location: ErrorLocation,
        #[source]
        source: ModelError,
    },
}
