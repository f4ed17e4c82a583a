use crate::IdentityStatus;

use std::str::FromStr;

#[test]
fn test_identity_status_as_str() {
    assert_eq!(IdentityStatus::Active.as_str(), "active");
    assert_eq!(IdentityStatus::Inactive.as_str(), "inactive");
    assert_eq!(IdentityStatus::Blocked.as_str(), "blocked");
    assert_eq!(IdentityStatus::Deleted.as_str(), "deleted");
}

#[test]
fn test_identity_status_from_str() {
    assert_eq!(
        IdentityStatus::from_str("active").unwrap(),
        IdentityStatus::Active
    );
    assert_eq!(
        IdentityStatus::from_str("blocked").unwrap(),
        IdentityStatus::Blocked
    );
    assert!(IdentityStatus::from_str("suspended").is_err());
}

#[test]
fn test_identity_status_default() {
    assert_eq!(IdentityStatus::default(), IdentityStatus::Inactive);
}

#[test]
fn test_identity_status_from_raw_falls_back_to_inactive() {
    assert_eq!(IdentityStatus::from_raw("active"), IdentityStatus::Active);
    assert_eq!(
        IdentityStatus::from_raw("suspended"),
        IdentityStatus::Inactive
    );
    assert_eq!(IdentityStatus::from_raw(""), IdentityStatus::Inactive);
}

#[test]
fn test_identity_status_serde_round_trip() {
    let json = serde_json::to_string(&IdentityStatus::Blocked).unwrap();
    assert_eq!(json, "\"blocked\"");
    let back: IdentityStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, IdentityStatus::Blocked);
}
