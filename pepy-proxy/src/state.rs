use crate::config::Config;
use crate::upstream::PepyClient;

/// Shared router state. Built once from [`Config`] at startup.
#[derive(Clone)]
pub struct AppState {
    pub pepy: PepyClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            pepy: PepyClient::new(config),
        }
    }
}
