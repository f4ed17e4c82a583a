use crate::envelope::ApiResponse;
use crate::{BAD_RESPONSE_SHAPE, normalize_delete, normalize_entity, normalize_list,
    sanitize_identity};

use labdesk_core::{IdentityStatus, RoleKey};

use serde_json::json;

fn assert_bad_shape<T: std::fmt::Debug>(response: ApiResponse<T>) {
    match response {
        ApiResponse::Failure {
            status_code,
            error,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(error.code, BAD_RESPONSE_SHAPE);
        }
        other => panic!("expected BAD_RESPONSE_SHAPE, got {other:?}"),
    }
}

// ------------------------------------------------------------------ entities

#[test]
fn test_sanitize_accepts_minimal_record() {
    let raw = json!({"identityId": "u1", "email": "a@b.com", "identityName": "A"});
    let identity = sanitize_identity(&raw).unwrap();
    assert_eq!(identity.identity_id, "u1");
    assert_eq!(identity.identity_status, IdentityStatus::Inactive);
    assert!(identity.roles.is_empty());
    assert!(identity.permissions.is_none());
}

#[test]
fn test_sanitize_rejects_missing_required_fields() {
    assert!(sanitize_identity(&json!({"email": "a@b.com", "identityName": "A"})).is_none());
    assert!(sanitize_identity(&json!({"identityId": "u1", "identityName": "A"})).is_none());
    assert!(sanitize_identity(&json!({"identityId": "u1", "email": "a@b.com"})).is_none());
}

#[test]
fn test_sanitize_rejects_empty_required_fields() {
    let raw = json!({"identityId": "", "email": "a@b.com", "identityName": "A"});
    assert!(sanitize_identity(&raw).is_none());
}

#[test]
fn test_sanitize_coerces_status_and_roles() {
    let raw = json!({
        "identityId": "u1",
        "email": "a@b.com",
        "identityName": "A",
        "identityStatus": "suspended",
        "roles": {"admin": 1, "hr": false, "bogus": true}
    });
    let identity = sanitize_identity(&raw).unwrap();
    assert_eq!(identity.identity_status, IdentityStatus::Inactive);
    assert!(identity.roles.is_granted(RoleKey::Admin));
    assert!(!identity.roles.is_granted(RoleKey::Hr));
    assert_eq!(identity.roles.granted(), vec![RoleKey::Admin]);
}

#[test]
fn test_sanitize_keeps_audit_fields() {
    let raw = json!({
        "identityId": "u1",
        "email": "a@b.com",
        "identityName": "A",
        "createdAt": "2026-01-01T00:00:00Z",
        "createdBy": {"identityId": "u0", "identityName": "Root", "alias": "r"},
        "modifiedAt": "2026-02-01T00:00:00Z",
        "deletedAt": "2026-03-01T00:00:00Z"
    });
    let identity = sanitize_identity(&raw).unwrap();
    assert_eq!(identity.created_at, "2026-01-01T00:00:00Z");
    assert_eq!(identity.created_by.as_ref().unwrap().alias.as_deref(), Some("r"));
    assert_eq!(identity.modified_at.as_deref(), Some("2026-02-01T00:00:00Z"));
    assert!(identity.is_deleted());
}

#[test]
fn test_sanitize_drops_malformed_actor_ref() {
    let raw = json!({
        "identityId": "u1",
        "email": "a@b.com",
        "identityName": "A",
        "createdBy": {"identityId": "u0"}
    });
    let identity = sanitize_identity(&raw).unwrap();
    assert!(identity.created_by.is_none());
}

#[test]
fn test_sanitize_is_idempotent_on_canonical_input() {
    let raw = json!({
        "identityId": "u1",
        "email": "a@b.com",
        "identityName": "A",
        "alias": "al",
        "roles": {"admin": true, "orders": false},
        "identityStatus": "active",
        "createdAt": "2026-01-01T00:00:00Z",
        "permissions": {"samples.read": true}
    });
    let once = sanitize_identity(&raw).unwrap();
    let round_tripped = serde_json::to_value(&once).unwrap();
    let twice = sanitize_identity(&round_tripped).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_entity_tries_nested_data() {
    let raw = json!({
        "data": {"identityId": "u1", "email": "a@b.com", "identityName": "A"}
    });
    let identity = normalize_entity(raw).into_result().unwrap();
    assert_eq!(identity.identity_id, "u1");
}

#[test]
fn test_normalize_entity_rejects_garbage() {
    assert_bad_shape(normalize_entity(json!({"data": {"identityId": "u1"}})));
    assert_bad_shape(normalize_entity(json!("nonsense")));
    assert_bad_shape(normalize_entity(json!(null)));
}

// --------------------------------------------------------------------- lists

#[test]
fn test_normalize_list_drops_invalid_elements_preserving_order() {
    // u2 is dropped for missing email/name, pagination kept
    let raw = json!({
        "data": [
            {"identityId": "u1", "email": "a@b.com", "identityName": "A"},
            {"identityId": "u2"}
        ],
        "pagination": {"page": 1, "itemsPerPage": 20, "total": 2, "totalPages": 1}
    });
    match normalize_list(raw) {
        ApiResponse::Success { data, meta, .. } => {
            assert_eq!(data.len(), 1);
            assert_eq!(data[0].identity_id, "u1");
            let meta = meta.unwrap();
            assert_eq!(meta.page, 1);
            assert_eq!(meta.items_per_page, 20);
            assert_eq!(meta.total, 2);
            assert_eq!(meta.total_pages, 1);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn test_normalize_list_preserves_order_of_survivors() {
    let raw = json!({
        "data": [
            {"identityId": "u3", "email": "c@b.com", "identityName": "C"},
            {"identityId": "bad"},
            {"identityId": "u1", "email": "a@b.com", "identityName": "A"}
        ],
        "pagination": {"page": 1, "itemsPerPage": 20, "total": 3, "totalPages": 1}
    });
    let items = normalize_list(raw).into_result().unwrap();
    let ids: Vec<_> = items.iter().map(|i| i.identity_id.as_str()).collect();
    assert_eq!(ids, vec!["u3", "u1"]);
}

#[test]
fn test_normalize_list_rejects_non_array_data() {
    let raw = json!({
        "data": {"identityId": "u1"},
        "pagination": {"page": 1, "itemsPerPage": 20, "total": 1, "totalPages": 1}
    });
    assert_bad_shape(normalize_list(raw));
}

#[test]
fn test_normalize_list_rejects_bad_pagination() {
    // Missing one of the four mandatory numeric fields
    let raw = json!({
        "data": [],
        "pagination": {"page": 1, "itemsPerPage": 20, "total": 0}
    });
    assert_bad_shape(normalize_list(raw));

    // Non-numeric field
    let raw = json!({
        "data": [],
        "pagination": {"page": "1", "itemsPerPage": 20, "total": 0, "totalPages": 0}
    });
    assert_bad_shape(normalize_list(raw));

    // Missing entirely
    assert_bad_shape(normalize_list(json!({"data": []})));
}

// ----------------------------------------------------------------- envelopes

#[test]
fn test_canonical_success_envelope_passes_through() {
    let raw = json!({
        "success": true,
        "statusCode": 200,
        "data": [{"identityId": "u1", "email": "a@b.com", "identityName": "A"}],
        "meta": {"page": 2, "itemsPerPage": 10, "total": 11, "totalPages": 2}
    });
    match normalize_list(raw) {
        ApiResponse::Success {
            status_code,
            data,
            meta,
        } => {
            assert_eq!(status_code, 200);
            assert_eq!(data.len(), 1);
            assert_eq!(meta.unwrap().page, 2);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn test_canonical_failure_envelope_passes_through() {
    let raw = json!({
        "success": false,
        "statusCode": 404,
        "error": {"code": "NOT_FOUND", "message": "No such identity"}
    });
    match normalize_entity(raw) {
        ApiResponse::Failure {
            status_code,
            error,
        } => {
            assert_eq!(status_code, 404);
            assert_eq!(error.code, "NOT_FOUND");
            assert_eq!(error.message, "No such identity");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_canonical_failure_without_error_body_gets_fallbacks() {
    let raw = json!({"success": false, "statusCode": 500});
    match normalize_delete(raw) {
        ApiResponse::Failure { error, .. } => {
            assert_eq!(error.code, "UNKNOWN");
            assert_eq!(error.message, "Unknown error");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

// ------------------------------------------------------------------- deletes

#[test]
fn test_normalize_delete_accepts_flat_and_nested() {
    let receipt = normalize_delete(json!({"identityId": "u1", "deletedAt": "t"}))
        .into_result()
        .unwrap();
    assert_eq!(receipt.identity_id, "u1");
    assert_eq!(receipt.deleted_at.as_deref(), Some("t"));

    let receipt = normalize_delete(json!({"data": {"identityId": "u2"}}))
        .into_result()
        .unwrap();
    assert_eq!(receipt.identity_id, "u2");
    assert!(receipt.deleted_at.is_none());
}

#[test]
fn test_normalize_delete_rejects_missing_id() {
    assert_bad_shape(normalize_delete(json!({"deletedAt": "t"})));
    assert_bad_shape(normalize_delete(json!({"data": {}})));
}
