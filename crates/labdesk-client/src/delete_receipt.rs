use serde::{Deserialize, Serialize};

/// Acknowledgement of a soft delete.
///
/// The server sets `deletedAt`; whether the record stays visible afterwards
/// is server-defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub identity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}
