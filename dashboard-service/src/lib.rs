pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

use dashboard_core::config::Settings;
use services::{carts::CartStore, database::Database};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: Database,
    pub carts: CartStore,
}

impl AppState {
    pub fn new(settings: Settings, db: Database) -> Self {
        Self {
            settings: Arc::new(settings),
            db,
            carts: CartStore::seeded(),
        }
    }
}
