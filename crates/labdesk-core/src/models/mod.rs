pub mod actor_ref;
pub mod identity;
pub mod identity_status;
pub mod page_meta;
pub mod permission_map;
pub mod role_key;
pub mod role_set;
