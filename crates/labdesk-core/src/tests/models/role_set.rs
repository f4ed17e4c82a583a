use crate::{RoleKey, RoleSet};

use serde_json::json;

#[test]
fn test_all_false_covers_every_role() {
    let roles = RoleSet::all_false();
    for role in RoleKey::ALL {
        assert!(!roles.is_granted(role));
    }
    assert!(roles.granted().is_empty());
}

#[test]
fn test_unlisted_keys_read_as_false() {
    let roles = RoleSet::new();
    assert!(!roles.is_granted(RoleKey::Admin));
}

#[test]
fn test_coerce_truthy_values() {
    let raw = json!({
        "admin": true,
        "reception": 1,
        "workbench": "yes",
        "hr": 0,
        "documents": null,
        "orders": ""
    });
    let roles = RoleSet::coerce(&raw);
    assert!(roles.is_granted(RoleKey::Admin));
    assert!(roles.is_granted(RoleKey::Reception));
    assert!(roles.is_granted(RoleKey::Workbench));
    assert!(!roles.is_granted(RoleKey::Hr));
    assert!(!roles.is_granted(RoleKey::Documents));
    assert!(!roles.is_granted(RoleKey::Orders));
}

#[test]
fn test_coerce_drops_unknown_keys() {
    let raw = json!({"admin": true, "superuser": true});
    let roles = RoleSet::coerce(&raw);
    assert!(roles.is_granted(RoleKey::Admin));
    assert_eq!(roles.granted(), vec![RoleKey::Admin]);
}

#[test]
fn test_coerce_non_object_yields_empty() {
    assert!(RoleSet::coerce(&json!("admin")).is_empty());
    assert!(RoleSet::coerce(&json!(null)).is_empty());
    assert!(RoleSet::coerce(&json!([1, 2])).is_empty());
}

#[test]
fn test_grant_and_revoke() {
    let mut roles = RoleSet::all_false();
    roles.grant(RoleKey::Hr);
    assert!(roles.is_granted(RoleKey::Hr));
    roles.revoke(RoleKey::Hr);
    assert!(!roles.is_granted(RoleKey::Hr));
}

#[test]
fn test_serializes_as_plain_object() {
    let mut roles = RoleSet::new();
    roles.grant(RoleKey::Admin);
    roles.revoke(RoleKey::Orders);
    let value = serde_json::to_value(&roles).unwrap();
    assert_eq!(value, json!({"admin": true, "orders": false}));
}
