use crate::config::{clamp_days, Config};
use crate::remote::RemoteAnalyticsClient;
use crate::storage::DailyStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DailyStore>,
    pub remote: RemoteAnalyticsClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: DailyStore, remote: RemoteAnalyticsClient, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            remote,
            config: Arc::new(config),
        }
    }

    /// Requested window length, or the configured default, kept within 1..=365.
    pub fn days(&self, requested: Option<u32>) -> u32 {
        clamp_days(requested.unwrap_or(self.config.history_days))
    }
}
