use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_PACKAGE_MESSAGE: &str = "Package name is required";
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Error fetching package";

/// Everything the stats proxy can fail with. Each variant renders as
/// `{"error": "..."}` with an explicit status code.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{}", MISSING_PACKAGE_MESSAGE)]
    MissingParameter,
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
}

impl ProxyError {
    /// Upstream failure with no usable status or payload.
    pub fn upstream_generic() -> Self {
        ProxyError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERIC_UPSTREAM_MESSAGE.to_string(),
        }
    }

    /// Build an upstream failure from a raw status code and error body.
    /// Never fails: unknown statuses become 500 and unreadable bodies
    /// fall back to the generic message.
    pub fn from_upstream(status: u16, body: &[u8]) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = upstream_message(body).unwrap_or_else(|| GENERIC_UPSTREAM_MESSAGE.to_string());
        ProxyError::Upstream { status, message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(ErrorBody { error: self.to_string() })).into_response();
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        response
    }
}

fn upstream_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|field| value.get(field).and_then(|m| m.as_str()))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
