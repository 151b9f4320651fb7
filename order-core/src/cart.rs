//! Cart mutations, expressed as value-in/value-out operations.
//!
//! "Not found" and "invalid new quantity" are deliberate silent no-ops, not
//! errors: the quantity controls in the views clamp at 1 and a removal race
//! on an already-removed row should leave the cart as-is.

use crate::item::LineItem;

/// Set the quantity of the item matching `id` to `new_quantity`.
///
/// No-op when `new_quantity < 1` or when no item matches. Item order is
/// preserved; no other item changes.
pub fn update_quantity(items: Vec<LineItem>, id: i64, new_quantity: u32) -> Vec<LineItem> {
    if new_quantity < 1 {
        return items;
    }
    items
        .into_iter()
        .map(|mut item| {
            if item.id == id {
                item.quantity = new_quantity;
            }
            item
        })
        .collect()
}

/// Remove the item matching `id`, if present.
pub fn remove_item(items: Vec<LineItem>, id: i64) -> Vec<LineItem> {
    items.into_iter().filter(|item| item.id != id).collect()
}

/// Number of distinct line items in the cart.
pub fn item_count(items: &[LineItem]) -> usize {
    items.len()
}

/// Sum of quantities across all line items.
pub fn quantity_total(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn cart() -> Vec<LineItem> {
        [(1, 2, 15_500), (2, 1, 28_500), (3, 3, 12_000)]
            .into_iter()
            .map(|(id, quantity, unit_price)| LineItem {
                id,
                product: format!("Product {id}"),
                description: String::new(),
                category: String::new(),
                quantity,
                unit_price: Decimal::from(unit_price),
                tax_percent: Decimal::from(18),
            })
            .collect()
    }

    #[test]
    fn update_changes_only_the_matched_item() {
        let updated = update_quantity(cart(), 2, 5);
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0].quantity, 2);
        assert_eq!(updated[1].quantity, 5);
        assert_eq!(updated[2].quantity, 3);
        assert_eq!(
            updated.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn update_below_one_is_a_no_op() {
        assert_eq!(update_quantity(cart(), 1, 0), cart());
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        assert_eq!(update_quantity(cart(), 42, 7), cart());
    }

    #[test]
    fn remove_drops_exactly_one_item() {
        let remaining = remove_item(cart(), 2);
        assert_eq!(remaining.len(), 2);
        assert_eq!(
            remaining.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        assert_eq!(remove_item(cart(), 42), cart());
    }

    #[test]
    fn removing_everything_yields_an_empty_cart() {
        let mut items = cart();
        for id in [1, 2, 3] {
            items = remove_item(items, id);
        }
        assert!(items.is_empty());
    }

    #[test]
    fn cart_counters() {
        let items = cart();
        assert_eq!(item_count(&items), 3);
        assert_eq!(quantity_total(&items), 6);
    }
}
