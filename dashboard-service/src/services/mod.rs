//! Services module for dashboard-service.

pub mod carts;
pub mod database;
pub mod directory;
pub mod metrics;

pub use carts::CartStore;
pub use database::Database;
pub use metrics::{get_metrics, init_metrics};
