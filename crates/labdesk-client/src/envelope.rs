use crate::ClientError;

use labdesk_core::PageMeta;

/// Error code synthesized when a raw payload cannot be mapped to any known
/// shape. The backend "succeeded" at the transport level, so this is a
/// client-local error carrying status 500.
pub const BAD_RESPONSE_SHAPE: &str = "BAD_RESPONSE_SHAPE";

/// Error body of a failed canonical response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

/// Canonical result of any identity API call.
///
/// Resolved exactly once at the normalization boundary; downstream code
/// never re-inspects raw payload shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success {
        status_code: u16,
        data: T,
        meta: Option<PageMeta>,
    },
    Failure {
        status_code: u16,
        error: ApiErrorBody,
    },
}

impl<T> ApiResponse<T> {
    /// A normalized success synthesized from a raw (non-envelope) payload.
    pub fn success(data: T, meta: Option<PageMeta>) -> Self {
        Self::Success {
            status_code: 200,
            data,
            meta,
        }
    }

    /// The client-local failure for an unmappable payload.
    pub fn bad_shape<S: Into<String>>(message: S) -> Self {
        Self::Failure {
            status_code: 500,
            error: ApiErrorBody {
                code: BAD_RESPONSE_SHAPE.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The single unwrap seam: failures become [`ClientError::Api`] so UI
    /// mutation handlers have one catch path for normalizer and transport
    /// errors alike.
    #[track_caller]
    pub fn into_result(self) -> Result<T, ClientError> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { error, .. } => {
                Err(ClientError::api_error(error.code, error.message))
            }
        }
    }

    /// Pagination metadata, if this was a successful list response.
    pub fn meta(&self) -> Option<&PageMeta> {
        match self {
            Self::Success { meta, .. } => meta.as_ref(),
            Self::Failure { .. } => None,
        }
    }
}
