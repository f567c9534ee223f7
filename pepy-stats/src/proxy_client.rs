use async_trait::async_trait;
use serde::Deserialize;

use crate::types::{PackageStats, Result};

/// Anything that can produce download statistics for a package name.
#[async_trait(?Send)]
pub trait StatsSource {
    async fn fetch_stats(&self, package: &str) -> Result<PackageStats>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the pepy-proxy `/api/pepy` endpoint.
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn stats_url(&self) -> String {
        format!("{}/api/pepy", self.base_url)
    }
}

#[async_trait(?Send)]
impl StatsSource for ProxyClient {
    async fn fetch_stats(&self, package: &str) -> Result<PackageStats> {
        let resp = self
            .http
            .get(self.stats_url())
            .query(&[("package", package)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| "no error detail".to_string());
            return Err(format!("Proxy returned {}: {}", status, detail).into());
        }

        Ok(resp.json().await?)
    }
}
