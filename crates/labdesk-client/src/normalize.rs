//! Response-shape normalization.
//!
//! The backend evolves its envelope independently of this client, so every
//! raw payload is resolved here, once, into the canonical [`ApiResponse`].
//! Three raw shapes are recognized: the canonical envelope itself (boolean
//! `success` plus numeric `statusCode`), a bare list envelope (`data` array
//! plus `pagination`), and a bare entity. Anything else is
//! [`BAD_RESPONSE_SHAPE`](crate::BAD_RESPONSE_SHAPE).

use crate::envelope::{ApiErrorBody, ApiResponse};
use crate::DeleteReceipt;

use labdesk_core::{ActorRef, Identity, IdentityStatus, PageMeta, RoleSet};

use log::debug;
use serde_json::Value;

/// Normalize a list-shaped payload into a page of identities.
///
/// Elements that fail the required-field contract are silently dropped
/// (lenient-list policy) rather than failing the whole call; original order
/// is preserved. A non-array `data` or malformed `pagination` rejects the
/// envelope.
pub fn normalize_list(raw: Value) -> ApiResponse<Vec<Identity>> {
    if is_canonical_envelope(&raw) {
        return match split_envelope(raw) {
            EnvelopeParts::Failure {
                status_code,
                error,
            } => ApiResponse::Failure { status_code, error },
            EnvelopeParts::Success {
                status_code,
                data,
                meta,
            } => match data.as_ref().map(|d| sanitize_elements(d)) {
                Some(Some(items)) => ApiResponse::Success {
                    status_code,
                    data: items,
                    meta,
                },
                _ => ApiResponse::bad_shape("envelope data is not an identity array"),
            },
        };
    }

    let Some(data) = raw.get("data") else {
        return ApiResponse::bad_shape("list payload has no data field");
    };
    let Some(items) = sanitize_elements(data) else {
        return ApiResponse::bad_shape("list data is not an array");
    };
    let Some(meta) = raw.get("pagination").and_then(sanitize_page_meta) else {
        return ApiResponse::bad_shape("list payload has no valid pagination");
    };

    ApiResponse::success(items, Some(meta))
}

/// Normalize a single-entity payload (detail/create/update).
///
/// Tries the raw payload directly as the entity, then `raw.data`; if both
/// fail the call is rejected.
pub fn normalize_entity(raw: Value) -> ApiResponse<Identity> {
    if is_canonical_envelope(&raw) {
        return match split_envelope(raw) {
            EnvelopeParts::Failure {
                status_code,
                error,
            } => ApiResponse::Failure { status_code, error },
            EnvelopeParts::Success {
                status_code,
                data,
                meta,
            } => match data.as_ref().and_then(sanitize_identity) {
                Some(identity) => ApiResponse::Success {
                    status_code,
                    data: identity,
                    meta,
                },
                None => ApiResponse::bad_shape("envelope data is not a valid identity"),
            },
        };
    }

    match sanitize_identity(&raw).or_else(|| raw.get("data").and_then(sanitize_identity)) {
        Some(identity) => ApiResponse::success(identity, None),
        None => ApiResponse::bad_shape("payload is not a valid identity"),
    }
}

/// Normalize a delete acknowledgement.
///
/// Accepts `{identityId, deletedAt?}` directly or nested under `.data`.
pub fn normalize_delete(raw: Value) -> ApiResponse<DeleteReceipt> {
    if is_canonical_envelope(&raw) {
        return match split_envelope(raw) {
            EnvelopeParts::Failure {
                status_code,
                error,
            } => ApiResponse::Failure { status_code, error },
            EnvelopeParts::Success {
                status_code,
                data,
                meta,
            } => match data.as_ref().and_then(sanitize_receipt) {
                Some(receipt) => ApiResponse::Success {
                    status_code,
                    data: receipt,
                    meta,
                },
                None => ApiResponse::bad_shape("envelope data is not a delete receipt"),
            },
        };
    }

    match sanitize_receipt(&raw).or_else(|| raw.get("data").and_then(sanitize_receipt)) {
        Some(receipt) => ApiResponse::success(receipt, None),
        None => ApiResponse::bad_shape("payload is not a delete receipt"),
    }
}

/// Sanitize one raw value into an [`Identity`].
///
/// `identityId`, `email` and `identityName` must be present and non-empty;
/// a record missing any of them is unparseable and rejected, never
/// defaulted. Everything else is coerced: status falls back to `inactive`,
/// roles go through the truthiness rule, unknown fields are ignored.
/// Idempotent on already-canonical input.
pub fn sanitize_identity(raw: &Value) -> Option<Identity> {
    let obj = raw.as_object()?;

    let identity_id = required_string(obj.get("identityId"))?;
    let email = required_string(obj.get("email"))?;
    let identity_name = required_string(obj.get("identityName"))?;

    let identity_status = obj
        .get("identityStatus")
        .and_then(Value::as_str)
        .map(IdentityStatus::from_raw)
        .unwrap_or_default();

    let roles = obj
        .get("roles")
        .map(RoleSet::coerce)
        .unwrap_or_default();

    let permissions = obj
        .get("permissions")
        .and_then(Value::as_object)
        .cloned();

    Some(Identity {
        identity_id,
        email,
        identity_name,
        alias: optional_string(obj.get("alias")),
        roles,
        identity_status,
        created_at: optional_string(obj.get("createdAt")).unwrap_or_default(),
        created_by: sanitize_actor(obj.get("createdBy")),
        modified_at: optional_string(obj.get("modifiedAt")),
        modified_by: sanitize_actor(obj.get("modifiedBy")),
        deleted_at: optional_string(obj.get("deletedAt")),
        permissions,
    })
}

// ---------------------------------------------------------------------------

enum EnvelopeParts {
    Success {
        status_code: u16,
        data: Option<Value>,
        meta: Option<PageMeta>,
    },
    Failure {
        status_code: u16,
        error: ApiErrorBody,
    },
}

/// A payload is already canonical when it carries a boolean `success` and a
/// numeric `statusCode`.
fn is_canonical_envelope(raw: &Value) -> bool {
    raw.get("success").is_some_and(Value::is_boolean)
        && raw.get("statusCode").is_some_and(Value::is_number)
}

fn split_envelope(mut raw: Value) -> EnvelopeParts {
    let success = raw
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let status_code = raw
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|n| u16::try_from(n).ok())
        .unwrap_or(if success { 200 } else { 500 });

    if success {
        let meta = raw.get("meta").and_then(sanitize_page_meta);
        let data = raw.get_mut("data").map(Value::take);
        EnvelopeParts::Success {
            status_code,
            data,
            meta,
        }
    } else {
        let error = raw.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        EnvelopeParts::Failure {
            status_code,
            error: ApiErrorBody { code, message },
        }
    }
}

/// Sanitize each array element independently, dropping failures.
/// Returns None when the value is not an array at all.
fn sanitize_elements(data: &Value) -> Option<Vec<Identity>> {
    let array = data.as_array()?;

    let mut items = Vec::with_capacity(array.len());
    for element in array {
        match sanitize_identity(element) {
            Some(identity) => items.push(identity),
            None => debug!("dropping list element failing required-field checks"),
        }
    }
    Some(items)
}

/// All four pagination fields must be present and numeric.
fn sanitize_page_meta(raw: &Value) -> Option<PageMeta> {
    let obj = raw.as_object()?;
    Some(PageMeta {
        page: obj.get("page").and_then(Value::as_u64)?,
        items_per_page: obj.get("itemsPerPage").and_then(Value::as_u64)?,
        total: obj.get("total").and_then(Value::as_u64)?,
        total_pages: obj.get("totalPages").and_then(Value::as_u64)?,
    })
}

fn sanitize_receipt(raw: &Value) -> Option<DeleteReceipt> {
    let obj = raw.as_object()?;
    Some(DeleteReceipt {
        identity_id: required_string(obj.get("identityId"))?,
        deleted_at: optional_string(obj.get("deletedAt")),
    })
}

fn sanitize_actor(raw: Option<&Value>) -> Option<ActorRef> {
    let obj = raw?.as_object()?;
    Some(ActorRef {
        identity_id: required_string(obj.get("identityId"))?,
        identity_name: required_string(obj.get("identityName"))?,
        alias: optional_string(obj.get("alias")),
    })
}

fn required_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(String::from)
}
