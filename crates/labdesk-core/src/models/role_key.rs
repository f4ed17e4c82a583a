use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of grantable roles, one per dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    /// Full administrative access, including identity management
    Admin,
    /// Sample reception desk
    Reception,
    /// Technician workbenches
    Workbench,
    /// HR / identity administration
    Hr,
    /// Document center
    Documents,
    /// Order and CRM tracking
    Orders,
}

impl RoleKey {
    /// All role keys, in stable order. Used to seed an all-false role map.
    pub const ALL: [RoleKey; 6] = [
        Self::Admin,
        Self::Reception,
        Self::Workbench,
        Self::Hr,
        Self::Documents,
        Self::Orders,
    ];

    /// Convert to wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Reception => "reception",
            Self::Workbench => "workbench",
            Self::Hr => "hr",
            Self::Documents => "documents",
            Self::Orders => "orders",
        }
    }
}

impl FromStr for RoleKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "reception" => Ok(Self::Reception),
            "workbench" => Ok(Self::Workbench),
            "hr" => Ok(Self::Hr),
            "documents" => Ok(Self::Documents),
            "orders" => Ok(Self::Orders),
            _ => Err(CoreError::InvalidRoleKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
