//! End-to-end cart flow tests for order-core.

use order_core::{
    aggregate, format_inr, item_count, quantity_total, remove_item, tax_amount, total,
    untaxed_amount, update_quantity, LineItem,
};
use rust_decimal::Decimal;

/// The purchase-order cart the dashboard seeds for the furniture vendor.
fn purchase_order_cart() -> Vec<LineItem> {
    let rows: [(i64, &str, &str, &str, u32, i64, i64); 5] = [
        (
            1,
            "Executive Office Chair",
            "Ergonomic leather chair with lumbar support",
            "Office Furniture",
            2,
            15_500,
            18,
        ),
        (
            2,
            "Wooden Dining Table",
            "6-seater solid wood dining table",
            "Dining Furniture",
            1,
            28_500,
            18,
        ),
        (
            3,
            "Modern Sofa Set",
            "3-piece L-shaped sofa with cushions",
            "Living Room",
            1,
            45_000,
            18,
        ),
        (
            4,
            "Study Desk",
            "Computer desk with drawers and cable management",
            "Office Furniture",
            3,
            12_000,
            18,
        ),
        (5, "Bookshelf Unit", "5-tier wooden bookshelf", "Storage", 2, 8_500, 12),
    ];

    rows.into_iter()
        .map(
            |(id, product, description, category, quantity, unit_price, tax_percent)| LineItem {
                id,
                product: product.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                quantity,
                unit_price: Decimal::from(unit_price),
                tax_percent: Decimal::from(tax_percent),
            },
        )
        .collect()
}

#[test]
fn seeded_cart_totals() {
    let items = purchase_order_cart();
    let totals = aggregate(&items);

    // 31000 + 28500 + 45000 + 36000 + 17000
    assert_eq!(totals.grand_untaxed, Decimal::from(157_500));
    // 18% on 140500, 12% on 17000
    assert_eq!(totals.grand_tax, Decimal::from(27_330));
    assert_eq!(totals.grand_total, Decimal::from(184_830));

    assert_eq!(item_count(&items), 5);
    assert_eq!(quantity_total(&items), 9);

    let eighteen = &totals.breakdown[&Decimal::from(18)];
    assert_eq!(eighteen.taxable_amount, Decimal::from(140_500));
    assert_eq!(eighteen.tax_amount, Decimal::from(25_290));
    let twelve = &totals.breakdown[&Decimal::from(12)];
    assert_eq!(twelve.taxable_amount, Decimal::from(17_000));
    assert_eq!(twelve.tax_amount, Decimal::from(2_040));
}

#[test]
fn quantity_edit_then_removal_keeps_totals_consistent() {
    let items = purchase_order_cart();

    let items = update_quantity(items, 4, 1);
    let totals = aggregate(&items);
    // Study desk drops from 3 to 1: untaxed shrinks by 24000, its tax by 4320.
    assert_eq!(totals.grand_untaxed, Decimal::from(133_500));
    assert_eq!(totals.grand_total, Decimal::from(156_510));

    let items = remove_item(items, 5);
    let totals = aggregate(&items);
    assert_eq!(totals.breakdown.len(), 1);
    assert_eq!(totals.grand_untaxed, Decimal::from(116_500));
    assert_eq!(totals.grand_tax, Decimal::from(20_970));

    let summed: Decimal = items.iter().map(total).sum();
    assert_eq!(totals.grand_total, summed);
}

#[test]
fn decrementing_a_single_quantity_item_leaves_the_cart_unchanged() {
    let items = purchase_order_cart();
    // The dining table sits at quantity 1; the minus control clamps there.
    let unchanged = update_quantity(items.clone(), 2, 0);
    assert_eq!(unchanged, items);
}

#[test]
fn emptying_the_cart_reaches_the_empty_view_state() {
    let mut items = purchase_order_cart();
    for id in 1..=5 {
        items = remove_item(items, id);
    }
    assert!(items.is_empty());
    assert_eq!(aggregate(&items), order_core::OrderTotals::default());
}

#[test]
fn formatting_is_display_only() {
    let items = purchase_order_cart();
    let chair = &items[0];

    assert_eq!(format_inr(untaxed_amount(chair)), "₹31,000");
    assert_eq!(format_inr(tax_amount(chair)), "₹5,580");
    assert_eq!(format_inr(total(chair)), "₹36,580");

    let totals = aggregate(&items);
    assert_eq!(format_inr(totals.grand_total), "₹1,84,830");
    // The numeric value is untouched by formatting.
    assert_eq!(totals.grand_total, Decimal::from(184_830));
}
