use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::status::StatusTracker;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<Config>,
    pub device_status: StatusTracker,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config, device_status: StatusTracker) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            device_status,
        }
    }
}
