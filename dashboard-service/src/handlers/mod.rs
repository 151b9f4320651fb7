//! HTTP handlers for dashboard-service.

pub mod app;
pub mod auth;
pub mod cart;
pub mod customers;
pub mod invoices;
pub mod metrics;
pub mod vendors;
