//! Cart views and mutations.
//!
//! Every response re-renders the owning cart from scratch: per-line derived
//! figures, grand totals, and the tax breakdown all come from order-core on
//! each request. Formatted strings appear alongside the numeric values and
//! are never fed back into arithmetic.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;

use dashboard_core::error::AppError;
use order_core::{LineItem, aggregate, format_inr, item_count, quantity_total, tax_amount, total,
    untaxed_amount};

use crate::AppState;
use crate::dtos::UpdateQuantityRequest;
use crate::services::metrics::CART_MUTATIONS_TOTAL;

#[derive(Debug, Serialize)]
pub struct LineView {
    pub id: i64,
    pub product: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub unit_price_display: String,
    pub tax_percent: Decimal,
    pub untaxed_amount: Decimal,
    pub untaxed_amount_display: String,
    pub tax_amount: Decimal,
    pub tax_amount_display: String,
    pub total: Decimal,
    pub total_display: String,
}

#[derive(Debug, Serialize)]
pub struct RateView {
    pub tax_percent: Decimal,
    pub taxable_amount: Decimal,
    pub taxable_amount_display: String,
    pub tax_amount: Decimal,
    pub tax_amount_display: String,
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub key: String,
    pub empty: bool,
    pub item_count: usize,
    pub quantity_total: u64,
    pub items: Vec<LineView>,
    pub breakdown: Vec<RateView>,
    pub grand_untaxed: Decimal,
    pub grand_untaxed_display: String,
    pub grand_tax: Decimal,
    pub grand_tax_display: String,
    pub grand_total: Decimal,
    pub grand_total_display: String,
}

/// Render one cart.
pub(crate) fn cart_view(key: &str, items: Vec<LineItem>) -> CartView {
    let totals = aggregate(&items);

    let line_views = items
        .iter()
        .map(|item| {
            let untaxed = untaxed_amount(item).normalize();
            let tax = tax_amount(item).normalize();
            let line_total = total(item).normalize();
            LineView {
                id: item.id,
                product: item.product.clone(),
                description: item.description.clone(),
                category: item.category.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price.normalize(),
                unit_price_display: format_inr(item.unit_price),
                tax_percent: item.tax_percent.normalize(),
                untaxed_amount: untaxed,
                untaxed_amount_display: format_inr(untaxed),
                tax_amount: tax,
                tax_amount_display: format_inr(tax),
                total: line_total,
                total_display: format_inr(line_total),
            }
        })
        .collect();

    let breakdown = totals
        .breakdown
        .iter()
        .map(|(rate, rate_totals)| RateView {
            tax_percent: rate.normalize(),
            taxable_amount: rate_totals.taxable_amount.normalize(),
            taxable_amount_display: format_inr(rate_totals.taxable_amount),
            tax_amount: rate_totals.tax_amount.normalize(),
            tax_amount_display: format_inr(rate_totals.tax_amount),
        })
        .collect();

    CartView {
        key: key.to_string(),
        empty: items.is_empty(),
        item_count: item_count(&items),
        quantity_total: quantity_total(&items),
        items: line_views,
        breakdown,
        grand_untaxed: totals.grand_untaxed.normalize(),
        grand_untaxed_display: format_inr(totals.grand_untaxed),
        grand_tax: totals.grand_tax.normalize(),
        grand_tax_display: format_inr(totals.grand_tax),
        grand_total: totals.grand_total.normalize(),
        grand_total_display: format_inr(totals.grand_total),
    }
}

fn unknown_cart(key: &str) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Cart '{}' not found", key))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CartView>, AppError> {
    let items = state.carts.get(&key).ok_or_else(|| unknown_cart(&key))?;
    Ok(Json(cart_view(&key, items)))
}

/// Change one line's quantity. Quantities below 1 and unknown item ids are
/// silent no-ops: the response is the unchanged cart, not an error.
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path((key, item_id)): Path<(String, i64)>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Result<Json<CartView>, AppError> {
    let items = state
        .carts
        .set_quantity(&key, item_id, payload.quantity)
        .ok_or_else(|| unknown_cart(&key))?;

    CART_MUTATIONS_TOTAL
        .with_label_values(&["set_quantity"])
        .inc();

    Ok(Json(cart_view(&key, items)))
}

/// Remove one line. Unknown item ids leave the cart unchanged.
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path((key, item_id)): Path<(String, i64)>,
) -> Result<Json<CartView>, AppError> {
    let items = state
        .carts
        .remove_item(&key, item_id)
        .ok_or_else(|| unknown_cart(&key))?;

    CART_MUTATIONS_TOTAL
        .with_label_values(&["remove_item"])
        .inc();

    Ok(Json(cart_view(&key, items)))
}
