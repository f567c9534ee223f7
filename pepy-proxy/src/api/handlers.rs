use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::error::ProxyError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Proxy a package statistics lookup to pepy.tech.
pub async fn package_stats_handler(
    State(state): State<AppState>,
    params: Option<Query<Vec<(String, String)>>>,
) -> Result<Response, ProxyError> {
    let package = params
        .and_then(|Query(pairs)| first_package(pairs))
        .ok_or(ProxyError::MissingParameter)?;

    tracing::info!("Fetching download stats for {}", package);
    let body = state.pepy.fetch_project(&package).await?;
    tracing::debug!("Relaying {} bytes for {}", body.len(), package);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}

/// First `package` value in the query string, if it is non-empty.
/// Later repeats of the key are ignored.
fn first_package(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "package")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_package_wins() {
        let query = pairs(&[("package", "a"), ("package", "b")]);
        assert_eq!(first_package(query), Some("a".to_string()));
    }

    #[test]
    fn test_empty_first_package_is_missing() {
        let query = pairs(&[("other", "1"), ("package", ""), ("package", "b")]);
        assert_eq!(first_package(query), None);
    }

    #[test]
    fn test_no_package_key() {
        assert_eq!(first_package(pairs(&[("other", "1")])), None);
    }
}
