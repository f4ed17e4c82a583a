/// Open-ended permission mapping, present only on Detail responses.
///
/// The backend owns this schema; the client carries it opaquely and edits it
/// as structured text in the update form.
pub type PermissionMap = serde_json::Map<String, serde_json::Value>;
