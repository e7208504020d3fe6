use std::{fmt, sync::Arc};

use clipflow_core::{AppUnitOfWork, HistoryService};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub unit_of_work: Arc<AppUnitOfWork>,
    pub history_service: HistoryService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, unit_of_work: AppUnitOfWork) -> Self {
        let history_service = HistoryService::new(&unit_of_work);
        Self {
            unit_of_work: Arc::new(unit_of_work),
            history_service,
            config: Arc::new(config),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
