use crate::{
    ApiResponse, CacheKey, ClientError, ClientResult, DeleteReceipt, IDENTITY_NAMESPACE,
    IdentityClient, IdentityCreateBody, IdentityUpdateBody, InMemoryCache, ListQuery,
    ResponseCache,
};

use labdesk_core::Identity;

use std::sync::Arc;

use log::debug;
use serde_json::json;

/// Repository client with the cache seam wired in.
///
/// Reads populate the cache; detail reads are served from it when possible.
/// List reads always hit origin (the no-cache contract) but still repopulate
/// their entry for consumers that render stale-while-refetching. Every
/// successful mutation invalidates the whole identity namespace; a failed
/// mutation leaves cache state untouched.
pub struct CachedIdentityClient {
    inner: IdentityClient,
    cache: Arc<dyn ResponseCache>,
}

impl CachedIdentityClient {
    /// Wrap a client with the default in-memory cache
    pub fn new(inner: IdentityClient) -> Self {
        Self::with_cache(inner, Arc::new(InMemoryCache::new()))
    }

    /// Wrap a client with an externally owned cache
    pub fn with_cache(inner: IdentityClient, cache: Arc<dyn ResponseCache>) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &Arc<dyn ResponseCache> {
        &self.cache
    }

    /// List identities, always fetching from origin
    pub async fn list(&self, query: &ListQuery) -> ClientResult<ApiResponse<Vec<Identity>>> {
        let response = self.inner.list(query).await?;

        if let ApiResponse::Success { data, meta, .. } = &response {
            self.cache.put(
                CacheKey::list(query),
                json!({ "data": data, "pagination": meta }),
            );
        }

        Ok(response)
    }

    /// Get one identity, served from cache when present
    pub async fn detail(&self, identity_id: &str) -> ClientResult<ApiResponse<Identity>> {
        let key = CacheKey::detail(identity_id);

        if let Some(cached) = self.cache.get(&key) {
            if let Ok(identity) = serde_json::from_value::<Identity>(cached) {
                debug!("cache hit for {key}");
                return Ok(ApiResponse::success(identity, None));
            }
            // Unreadable entry: drop it and fall through to origin
            self.cache.invalidate(&key);
        }

        let response = self.inner.detail(identity_id).await?;

        if let ApiResponse::Success { data, .. } = &response {
            self.cache.put(key, serde_json::to_value(data)?);
        }

        Ok(response)
    }

    /// Create an identity, invalidating the namespace on success
    pub async fn create(&self, body: &IdentityCreateBody) -> ClientResult<ApiResponse<Identity>> {
        let response = self.inner.create(body).await?;
        self.invalidate_on_success(response.is_success());
        Ok(response)
    }

    /// Update an identity, invalidating the namespace on success
    pub async fn update(&self, body: &IdentityUpdateBody) -> ClientResult<ApiResponse<Identity>> {
        let response = self.inner.update(body).await?;
        self.invalidate_on_success(response.is_success());
        Ok(response)
    }

    /// Delete an identity, invalidating the namespace on success.
    ///
    /// A repeated delete whose server answer is not-found surfaces as a
    /// normal failure and leaves the cache state from the first (successful)
    /// deletion intact.
    pub async fn delete(&self, identity_id: &str) -> ClientResult<ApiResponse<DeleteReceipt>> {
        let response = self.inner.delete(identity_id).await?;
        self.invalidate_on_success(response.is_success());
        Ok(response)
    }

    /// Convenience seam mirroring the UI mutation path: normalize, then
    /// unwrap through the single error channel.
    pub async fn detail_or_err(&self, identity_id: &str) -> Result<Identity, ClientError> {
        self.detail(identity_id).await?.into_result()
    }

    fn invalidate_on_success(&self, success: bool) {
        if success {
            debug!("invalidating {IDENTITY_NAMESPACE} namespace after mutation");
            self.cache.invalidate_namespace(IDENTITY_NAMESPACE);
        }
    }
}
