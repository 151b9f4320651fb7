//! Line item model for order-core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product row within a cart, order, or bill.
///
/// `id` is unique within the owning collection only. `unit_price` and
/// `tax_percent` are fixed for the lifetime of the item in these views; the
/// only exposed mutations are quantity changes and whole-item removal, so a
/// present item always has `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub product: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    /// Whole currency units (rupees), not minor units.
    pub unit_price: Decimal,
    /// Percentage, e.g. 18 for 18%.
    pub tax_percent: Decimal,
}
