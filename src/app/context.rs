use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::DateFormatter;
use crate::remote::{HttpNewsApi, NewsApi};
use crate::repository::{ApiNewsRepository, NewsRepository};

pub struct AppContext {
    pub config: Config,
    pub repository: Arc<dyn NewsRepository + Send + Sync>,
    pub dates: DateFormatter,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let api: Arc<dyn NewsApi + Send + Sync> = Arc::new(HttpNewsApi::new(&config.api)?);
        let repository: Arc<dyn NewsRepository + Send + Sync> =
            Arc::new(ApiNewsRepository::new(api));
        Ok(Self::with_repository(config, repository))
    }

    /// Build a context around an existing repository.
    pub fn with_repository(
        config: Config,
        repository: Arc<dyn NewsRepository + Send + Sync>,
    ) -> Self {
        let dates = config.ui.date_formatter();
        Self {
            config,
            repository,
            dates,
        }
    }
}
