// src/state.rs
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Fresh state seeded with the sample catalog, orders and partners.
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::seeded(Utc::now()))),
            config: Arc::new(config),
        }
    }
}
