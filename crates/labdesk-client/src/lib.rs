//! HTTP client for the identity service.
//!
//! All five identity operations go through one normalization seam: raw JSON
//! payloads of whatever shape the backend currently emits are coerced into
//! the canonical [`ApiResponse`] envelope before anything downstream sees
//! them.

pub(crate) mod cache;
pub(crate) mod cached_client;
pub(crate) mod client;
pub(crate) mod delete_receipt;
pub(crate) mod envelope;
pub(crate) mod error;
pub(crate) mod normalize;
pub(crate) mod query;
pub(crate) mod request;

pub use cache::{CacheKey, InMemoryCache, ResponseCache, IDENTITY_NAMESPACE};
pub use cached_client::CachedIdentityClient;
pub use client::IdentityClient;
pub use delete_receipt::DeleteReceipt;
pub use envelope::{ApiErrorBody, ApiResponse, BAD_RESPONSE_SHAPE};
pub use error::{ClientError, Result as ClientResult};
pub use normalize::{normalize_delete, normalize_entity, normalize_list, sanitize_identity};
pub use query::{ListQuery, SortDirection};
pub use request::{IdentityCreateBody, IdentityUpdateBody};

#[cfg(test)]
mod tests;
