pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::actor_ref::ActorRef;
pub use models::identity::Identity;
pub use models::identity_status::IdentityStatus;
pub use models::page_meta::PageMeta;
pub use models::permission_map::PermissionMap;
pub use models::role_key::RoleKey;
pub use models::role_set::RoleSet;

#[cfg(test)]
mod tests;
