use crate::{
    ApiResponse, ClientError, ClientResult, DeleteReceipt, IdentityCreateBody, IdentityUpdateBody,
    ListQuery, normalize,
};

use labdesk_core::Identity;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

const LIST_PATH: &str = "/v2/identities/get/list";
const DETAIL_PATH: &str = "/v2/identities/get/detail";
const CREATE_PATH: &str = "/v2/identities/create";
const UPDATE_PATH: &str = "/v2/identities/update";
const DELETE_PATH: &str = "/v2/identities/delete";

/// HTTP client for the identity service
pub struct IdentityClient {
    pub base_url: String,
    pub actor_id: Option<String>,
    client: ReqwestClient,
}

impl IdentityClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `actor_id` - Optional actor ID to include in X-Actor-Id header
    pub fn new(base_url: &str, actor_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            actor_id: actor_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Create a new client with a per-request timeout.
    ///
    /// A builder failure is surfaced rather than silently dropping the
    /// configured timeout.
    pub fn with_timeout(
        base_url: &str,
        actor_id: Option<&str>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            actor_id: actor_id.map(String::from),
            client,
        })
    }

    /// Build a request with optional actor ID header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref actor_id) = self.actor_id {
            req = req.header("X-Actor-Id", actor_id);
        }

        req
    }

    /// Build a read request with cache-busting headers.
    ///
    /// Identity reads must reflect just-made mutations immediately, so every
    /// read forces origin freshness at the transport level.
    fn read_request(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::GET, path)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
    }

    /// Execute request and surface transport-level errors.
    ///
    /// A non-2xx response with a parseable `error{code,message}` body becomes
    /// [`ClientError::Api`]; everything else is left for the normalizer.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        #[allow(clippy::collapsible_if)]
        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::api_error(code, message));
            }
        }

        Ok(body)
    }

    /// List identities matching the query
    pub async fn list(&self, query: &ListQuery) -> ClientResult<ApiResponse<Vec<Identity>>> {
        let req = self.read_request(LIST_PATH).query(query);
        let raw = self.execute(req).await?;
        Ok(normalize::normalize_list(raw))
    }

    /// Get one identity by ID
    ///
    /// Fails fast with a local validation error on an empty ID - no network
    /// round-trip is wasted on a request that cannot succeed.
    pub async fn detail(&self, identity_id: &str) -> ClientResult<ApiResponse<Identity>> {
        if identity_id.trim().is_empty() {
            return Err(ClientError::validation("identity_id must not be empty"));
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DetailQuery<'a> {
            identity_id: &'a str,
        }

        let req = self
            .read_request(DETAIL_PATH)
            .query(&DetailQuery { identity_id });
        let raw = self.execute(req).await?;
        Ok(normalize::normalize_entity(raw))
    }

    /// Create a new identity
    pub async fn create(&self, body: &IdentityCreateBody) -> ClientResult<ApiResponse<Identity>> {
        debug!("creating identity {}", body.identity_name);
        let req = self.request(Method::POST, CREATE_PATH).json(body);
        let raw = self.execute(req).await?;
        Ok(normalize::normalize_entity(raw))
    }

    /// Update an identity (partial patch)
    pub async fn update(&self, body: &IdentityUpdateBody) -> ClientResult<ApiResponse<Identity>> {
        if body.identity_id.trim().is_empty() {
            return Err(ClientError::validation("identity_id must not be empty"));
        }

        let req = self.request(Method::POST, UPDATE_PATH).json(body);
        let raw = self.execute(req).await?;
        Ok(normalize::normalize_entity(raw))
    }

    /// Soft-delete an identity
    ///
    /// Idempotent from the caller's perspective: deleting an already-deleted
    /// ID surfaces whatever the server answers (typically not-found) through
    /// the same error path as any other failure.
    pub async fn delete(&self, identity_id: &str) -> ClientResult<ApiResponse<DeleteReceipt>> {
        if identity_id.trim().is_empty() {
            return Err(ClientError::validation("identity_id must not be empty"));
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DeleteBody<'a> {
            identity_id: &'a str,
        }

        let req = self
            .request(Method::POST, DELETE_PATH)
            .json(&DeleteBody { identity_id });
        let raw = self.execute(req).await?;
        Ok(normalize::normalize_delete(raw))
    }
}
