//! Per-item and collection-level total computation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::item::LineItem;

/// Taxable amount and tax collected for one distinct tax rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateTotals {
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}

/// Aggregate figures over a line item collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub grand_untaxed: Decimal,
    pub grand_tax: Decimal,
    pub grand_total: Decimal,
    /// Totals partitioned by distinct tax rate present in the collection.
    pub breakdown: BTreeMap<Decimal, RateTotals>,
}

/// Amount before tax: `quantity * unit_price`.
pub fn untaxed_amount(item: &LineItem) -> Decimal {
    Decimal::from(item.quantity) * item.unit_price
}

/// Tax on the untaxed amount at the item's rate. A zero rate yields zero.
pub fn tax_amount(item: &LineItem) -> Decimal {
    untaxed_amount(item) * item.tax_percent / Decimal::ONE_HUNDRED
}

/// Untaxed amount plus tax.
pub fn total(item: &LineItem) -> Decimal {
    untaxed_amount(item) + tax_amount(item)
}

/// Compute grand totals and the per-rate tax breakdown in one traversal.
///
/// An empty collection yields all-zero totals and an empty breakdown.
pub fn aggregate(items: &[LineItem]) -> OrderTotals {
    let mut totals = OrderTotals::default();

    for item in items {
        let untaxed = untaxed_amount(item);
        let tax = tax_amount(item);

        totals.grand_untaxed += untaxed;
        totals.grand_tax += tax;

        let rate = totals.breakdown.entry(item.tax_percent).or_default();
        rate.taxable_amount += untaxed;
        rate.tax_amount += tax;
    }

    totals.grand_total = totals.grand_untaxed + totals.grand_tax;
    totals
}
