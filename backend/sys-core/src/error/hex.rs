use common::ErrorLocation;

use std::collections::TryReserveError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HexError {
    #[error("Allocation Error: {message} {location}")]
    Allocation {
        message: String,
        location: ErrorLocation,
        #[source]
        source: TryReserveError,
    },

    #[error("Encoding Error: {message} {location}")]
    Encoding {
        message: String,
        location: ErrorLocation,
    },
}
