//! Customer models for dashboard-service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::AccountStatus;

/// One product row on a customer's order card. Amounts are the stored
/// snapshot from the order, tax included in `total`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductLine {
    pub id: i64,
    pub name: String,
    pub qty: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Customer record shown on the customers listing.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: i64,
    pub customer_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub amount: Decimal,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub products: Vec<ProductLine>,
}

/// Customer header shown on the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub active: bool,
}
