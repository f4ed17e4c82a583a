//! Identity entity - a system principal with roles and status.

use crate::{ActorRef, IdentityStatus, PermissionMap, RoleSet};

use serde::{Deserialize, Serialize};

/// A principal record as exposed by the identity service.
///
/// `identity_id`, `email` and `identity_name` are mandatory non-empty strings
/// in any valid record; the normalizer rejects records missing any of them.
/// Timestamps are server-issued strings and carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub identity_id: String,
    pub email: String,
    pub identity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub roles: RoleSet,
    #[serde(default)]
    pub identity_status: IdentityStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ActorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<ActorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    /// Only present on Detail responses, never on List rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionMap>,
}

impl Identity {
    /// Check if the identity is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some() || self.identity_status == IdentityStatus::Deleted
    }

    /// Check if the identity is blocked
    pub fn is_blocked(&self) -> bool {
        self.identity_status == IdentityStatus::Blocked
    }
}
