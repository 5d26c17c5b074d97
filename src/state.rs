use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    repositories::PgStore,
    services::{chart::ChartService, grading::GradingService, statistics::StatisticsService},
};

/// Shared handles built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

impl AppState {
    fn store(&self) -> Arc<PgStore> {
        Arc::new(PgStore::new(self.pool.clone()))
    }

    pub fn grading_service(&self) -> GradingService {
        let store = self.store();
        GradingService::new(store.clone(), store.clone(), store.clone(), store)
    }

    pub fn statistics_service(&self) -> StatisticsService {
        let store = self.store();
        StatisticsService::new(store.clone(), store.clone(), store.clone(), store)
    }

    pub fn chart_service(&self) -> ChartService {
        let store = self.store();
        ChartService::new(store.clone(), store.clone(), store)
    }
}
