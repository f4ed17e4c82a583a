use crate::ListQuery;

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Namespace shared by every identity cache key. Mutations invalidate it
/// wholesale (coarse invalidation) rather than patching single entries.
pub const IDENTITY_NAMESPACE: &str = "identities";

/// Key for one cached identity response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A list page, keyed by the canonical query serialization
    List(String),
    /// A detail response, keyed by identity ID
    Detail(String),
}

impl CacheKey {
    pub fn list(query: &ListQuery) -> Self {
        Self::List(query.cache_key())
    }

    pub fn detail<S: Into<String>>(identity_id: S) -> Self {
        Self::Detail(identity_id.into())
    }

    pub fn namespace(&self) -> &'static str {
        IDENTITY_NAMESPACE
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(query) => write!(f, "{IDENTITY_NAMESPACE}:list:{query}"),
            Self::Detail(id) => write!(f, "{IDENTITY_NAMESPACE}:detail:{id}"),
        }
    }
}

/// Injected cache seam.
///
/// The repository client does not hard-wire any particular caching library;
/// anything with get/put/invalidate semantics can sit behind this trait.
/// Implementations must serialize writes per key.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Value>;
    fn put(&self, key: CacheKey, value: Value);
    fn invalidate(&self, key: &CacheKey);
    /// Discard every entry under the namespace (coarse invalidation).
    fn invalidate_namespace(&self, namespace: &str);
}

/// Default in-process cache backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&self, key: &str, value: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }
}

impl ResponseCache for InMemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Value> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(&key.to_string()).cloned())
    }

    fn put(&self, key: CacheKey, value: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    fn invalidate(&self, key: &CacheKey) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&key.to_string());
        }
    }

    fn invalidate_namespace(&self, namespace: &str) {
        let prefix = format!("{namespace}:");
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|key, _| !key.starts_with(&prefix));
        }
    }
}
