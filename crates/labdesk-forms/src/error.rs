use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the form layer, all caught before any network call.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Required field is empty: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Permissions text is not a JSON object: {message} {location}")]
    PermissionsParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid form transition: expected {expected}, was {actual} {location}")]
    InvalidPhase {
        expected: &'static str,
        actual: String,
        location: ErrorLocation,
    },
}

impl FormError {
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn permissions_parse<S: Into<String>>(message: S) -> Self {
        Self::PermissionsParse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_phase(expected: &'static str, actual: impl std::fmt::Debug) -> Self {
        Self::InvalidPhase {
            expected,
            actual: format!("{actual:?}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
