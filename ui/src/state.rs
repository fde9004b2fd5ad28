use std::sync::Arc;

use usergrid_business::{BusinessConfig, EhttpFetcher, FetchService};

use crate::widgets::DataGridState;

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub config: BusinessConfig,
    /// Outbound HTTP, swapped for a mock in tests.
    pub fetcher: Arc<dyn FetchService>,
    pub data_grid: DataGridState,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            fetcher: Arc::new(EhttpFetcher),
            data_grid: DataGridState::default(),
        }
    }

    /// State talking to a mock server at `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn FetchService>) -> Self {
        self.fetcher = fetcher;
        self
    }
}
