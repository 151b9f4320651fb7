//! dashboard-core: shared infrastructure for the furniture dashboard.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
