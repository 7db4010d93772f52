// HTTP error envelope
//
// Every failure leaves the gateway as
// {"success": false, "error": ..., "message"?: ..., "details"?: ...}.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing field, unknown action, bad parameter
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Feature switched off because its credential is absent
    #[error("{error}")]
    ServiceUnavailable { error: String, message: Option<String> },

    /// Upstream provider failure passed through with its own status
    #[error("{error}")]
    Upstream {
        status: StatusCode,
        error: String,
        details: Option<Value>,
    },

    #[error("{error}")]
    Internal { error: String, message: Option<String> },
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::BadRequest(error.into())
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::NotFound(error.into())
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::Internal {
            error: error.into(),
            message: None,
        }
    }

    /// 500 carrying the underlying cause as `message`.
    pub fn internal_with(error: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            error: error.into(),
            message: Some(cause.to_string()),
        }
    }

    pub fn unknown_action() -> Self {
        Self::bad_request("Unknown action")
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, message, details) = match &self {
            Self::BadRequest(error) | Self::NotFound(error) => (error.as_str(), None, None),
            Self::ServiceUnavailable { error, message } | Self::Internal { error, message } => {
                (error.as_str(), message.as_deref(), None)
            }
            Self::Upstream { error, details, .. } => (error.as_str(), None, details.as_ref()),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {} ({})", error, message.unwrap_or("-"));
        }

        let body = ErrorBody {
            success: false,
            error,
            message,
            details,
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::BadRequest(format!("Invalid form data: {}", rejection.body_text()))
    }
}
