use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    /// Identity can sign in and act
    Active,
    /// Identity exists but is not yet (or no longer) enabled
    #[default]
    Inactive,
    /// Identity is locked out by an administrator
    Blocked,
    /// Identity is soft-deleted
    Deleted,
}

impl IdentityStatus {
    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Blocked => "blocked",
            Self::Deleted => "deleted",
        }
    }

    /// Lenient coercion used at the response boundary: any value outside the
    /// four allowed literals maps to `Inactive` rather than failing the record.
    pub fn from_raw(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }
}

impl FromStr for IdentityStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "blocked" => Ok(Self::Blocked),
            "deleted" => Ok(Self::Deleted),
            _ => Err(CoreError::InvalidIdentityStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IdentityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
