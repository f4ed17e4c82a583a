use crate::{Identity, IdentityStatus, RoleSet};

use serde_json::json;

fn minimal_identity() -> Identity {
    Identity {
        identity_id: "u1".to_string(),
        email: "a@b.com".to_string(),
        identity_name: "A".to_string(),
        alias: None,
        roles: RoleSet::new(),
        identity_status: IdentityStatus::Active,
        created_at: "2026-01-01T00:00:00Z".to_string(),
        created_by: None,
        modified_at: None,
        modified_by: None,
        deleted_at: None,
        permissions: None,
    }
}

#[test]
fn test_is_deleted_via_timestamp() {
    let mut identity = minimal_identity();
    assert!(!identity.is_deleted());
    identity.deleted_at = Some("2026-02-01T00:00:00Z".to_string());
    assert!(identity.is_deleted());
}

#[test]
fn test_is_deleted_via_status() {
    let mut identity = minimal_identity();
    identity.identity_status = IdentityStatus::Deleted;
    assert!(identity.is_deleted());
}

#[test]
fn test_is_blocked() {
    let mut identity = minimal_identity();
    assert!(!identity.is_blocked());
    identity.identity_status = IdentityStatus::Blocked;
    assert!(identity.is_blocked());
}

#[test]
fn test_wire_shape_is_camel_case() {
    let value = serde_json::to_value(minimal_identity()).unwrap();
    assert_eq!(value["identityId"], "u1");
    assert_eq!(value["identityName"], "A");
    assert_eq!(value["identityStatus"], "active");
    assert_eq!(value["createdAt"], "2026-01-01T00:00:00Z");
    // Optional fields are omitted, not null
    assert!(value.get("alias").is_none());
    assert!(value.get("permissions").is_none());
}

#[test]
fn test_deserializes_canonical_detail() {
    let raw = json!({
        "identityId": "u2",
        "email": "tech@lab.example",
        "identityName": "Tech",
        "alias": "t",
        "roles": {"workbench": true},
        "identityStatus": "blocked",
        "createdAt": "2026-01-01T00:00:00Z",
        "createdBy": {"identityId": "u1", "identityName": "Admin"},
        "permissions": {"samples.read": true}
    });
    let identity: Identity = serde_json::from_value(raw).unwrap();
    assert_eq!(identity.identity_id, "u2");
    assert_eq!(identity.identity_status, IdentityStatus::Blocked);
    assert_eq!(
        identity.created_by.as_ref().unwrap().identity_name,
        "Admin"
    );
    assert!(identity.permissions.is_some());
}
