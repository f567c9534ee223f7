use axum::body::Bytes;
use reqwest::header::AUTHORIZATION;
use serde::de::IgnoredAny;

use crate::api::error::ProxyError;
use crate::config::Config;

/// Client for the pepy.tech project statistics endpoint.
#[derive(Clone)]
pub struct PepyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PepyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.pepy_api_url.trim_end_matches('/').to_string(),
            api_key: config.pepy_api_key.clone(),
        }
    }

    /// Upstream URL for a package. The name goes into the path as-is.
    pub fn project_url(&self, package: &str) -> String {
        format!("{}/api/v2/projects/{}", self.base_url, package)
    }

    /// Fetch the statistics document for `package` and return the upstream
    /// body untouched once it is known to be JSON.
    pub async fn fetch_project(&self, package: &str) -> Result<Bytes, ProxyError> {
        let mut request = self.http.get(self.project_url(package));
        if !self.api_key.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", self.api_key));
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Upstream request for {} failed: {}", package, e);
            match e.status() {
                Some(status) => ProxyError::from_upstream(status.as_u16(), b""),
                None => ProxyError::upstream_generic(),
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!("Reading upstream body for {} failed: {}", package, e);
            if status.is_success() {
                ProxyError::upstream_generic()
            } else {
                ProxyError::from_upstream(status.as_u16(), b"")
            }
        })?;

        if !status.is_success() {
            tracing::warn!("Upstream returned {} for {}", status.as_u16(), package);
            return Err(ProxyError::from_upstream(status.as_u16(), &body));
        }

        if let Err(e) = serde_json::from_slice::<IgnoredAny>(&body) {
            tracing::warn!("Upstream body for {} is not valid JSON: {}", package, e);
            return Err(ProxyError::upstream_generic());
        }

        Ok(body)
    }
}
