use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
///
/// All four fields are mandatory; an envelope missing or malforming any one
/// is rejected at the normalization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub items_per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}
