//! Vendor models for dashboard-service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AccountStatus, ProductLine};

/// Vendor record shown on the vendors listing.
#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub id: i64,
    pub partner_name: String,
    pub account_name: String,
    pub email: String,
    pub phone: String,
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub products: Vec<ProductLine>,
}

/// Vendor header shown on the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct VendorProfile {
    pub id: i64,
    pub partner_name: String,
    pub account_name: String,
    pub email: String,
    pub phone: String,
    pub vendor_number: String,
    pub address: String,
    pub gst: String,
    pub total_pending: Decimal,
    pub total_orders: u32,
}
