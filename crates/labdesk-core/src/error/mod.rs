use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity status: {value} {location}")]
    InvalidIdentityStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role key: {value} {location}")]
    InvalidRoleKey {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
