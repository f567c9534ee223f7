use crate::proxy_client::StatsSource;
use crate::types::{PackageStats, Result};

pub const DEFAULT_PACKAGE: &str = "pyfilterlab";
pub const FETCH_ERROR_MESSAGE: &str = "Package not found or failed to fetch";

/// A fetch the dashboard has started and is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub package: String,
}

/// What the dashboard should currently display.
#[derive(Debug, PartialEq, Eq)]
pub enum View<'a> {
    Idle,
    Loading(&'a str),
    Failed(&'a str),
    Loaded(&'a PackageStats),
}

/// View state for the stats dashboard: `Idle -> Loading -> {Loaded, Failed}`.
/// Each fetch carries a sequence number and only the newest may update the view.
#[derive(Debug)]
pub struct Dashboard {
    query: String,
    input: String,
    data: Option<PackageStats>,
    loading: bool,
    error: String,
    latest_seq: u64,
}

impl Dashboard {
    pub fn new(package: &str) -> Self {
        Self {
            query: package.to_string(),
            input: package.to_string(),
            data: None,
            loading: false,
            error: String::new(),
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Start the initial fetch for the committed name.
    pub fn mount(&mut self) -> FetchRequest {
        self.begin_fetch()
    }

    /// Commit the input buffer. Returns the fetch to run when the trimmed
    /// input is non-empty and differs from the committed name.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        let name = self.input.trim();
        if name.is_empty() || name == self.query {
            return None;
        }
        self.query = name.to_string();
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.loading = true;
        self.error.clear();
        FetchRequest {
            seq: self.latest_seq,
            package: self.query.clone(),
        }
    }

    /// Apply the outcome of `request`. Returns `false` and leaves the view
    /// alone when a newer fetch has started since.
    pub fn complete(&mut self, request: &FetchRequest, outcome: Result<PackageStats>) -> bool {
        if request.seq != self.latest_seq {
            return false;
        }
        match outcome {
            Ok(stats) => {
                self.data = Some(stats);
                self.error.clear();
            }
            Err(_) => {
                self.data = None;
                self.error = FETCH_ERROR_MESSAGE.to_string();
            }
        }
        self.loading = false;
        true
    }

    /// Run `request` against `source` and apply the result.
    pub async fn fetch(&mut self, source: &dyn StatsSource, request: FetchRequest) -> bool {
        let outcome = source.fetch_stats(&request.package).await;
        self.complete(&request, outcome)
    }

    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading(&self.query)
        } else if !self.error.is_empty() {
            View::Failed(&self.error)
        } else if let Some(stats) = &self.data {
            View::Loaded(stats)
        } else {
            View::Idle
        }
    }
}
