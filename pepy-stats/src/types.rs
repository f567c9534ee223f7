use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Download statistics for one package, as returned by pepy.tech.
///
/// `downloads` maps `YYYY-MM-DD` to per-version counts, both levels kept in
/// upstream order. Its sum is not expected to match `total_downloads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStats {
    pub id: String,
    pub total_downloads: u64,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default)]
    pub downloads: IndexMap<String, IndexMap<String, u64>>,
}

/// Result type for error handling
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
