//! order-core: order and cart total computation.
//!
//! Pure, synchronous arithmetic over in-memory line item collections. The
//! consuming views (purchase-order cart, customer and vendor detail pages)
//! own their collections and call into this crate for every derived figure;
//! nothing here performs I/O or keeps state between calls.

mod cart;
mod currency;
mod item;
mod totals;

pub use cart::{item_count, quantity_total, remove_item, update_quantity};
pub use currency::format_inr;
pub use item::LineItem;
pub use totals::{aggregate, tax_amount, total, untaxed_amount, OrderTotals, RateTotals};
