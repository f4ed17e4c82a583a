use labdesk_core::{IdentityStatus, PermissionMap, RoleSet};

use serde::{Deserialize, Serialize};

/// Body of `identities/create`.
///
/// The transport layer does not re-validate the string fields; the form
/// layer's submit predicate guards against empty values before this body is
/// ever built. A caller bypassing the form and sending an empty password
/// gets the server's rejection through the unified error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCreateBody {
    pub email: String,
    pub identity_name: String,
    pub alias: String,
    pub password: String,
    pub roles: RoleSet,
    pub permissions: PermissionMap,
    pub identity_status: IdentityStatus,
}

/// Body of `identities/update` - a partial patch.
///
/// Only `identity_id` is mandatory; unset fields are omitted from the wire
/// and leave the server-side value untouched. When roles are present the
/// full map is serialized, not a diff.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUpdateBody {
    pub identity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<RoleSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_status: Option<IdentityStatus>,
}
