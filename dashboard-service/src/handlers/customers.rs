use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use dashboard_core::error::AppError;
use order_core::format_inr;

use crate::AppState;
use crate::handlers::cart::{CartView, cart_view};
use crate::models::{Customer, CustomerProfile};
use crate::services::directory;

#[derive(Debug, Serialize)]
pub struct CustomerListEntry {
    #[serde(flatten)]
    pub record: Customer,
    pub amount_display: String,
    pub balance_display: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerDetail {
    pub profile: CustomerProfile,
    /// True when the requested id was unknown and the default record was
    /// substituted.
    pub fallback: bool,
    pub cart: CartView,
}

pub async fn list_customers() -> Json<Vec<CustomerListEntry>> {
    let entries = directory::customers()
        .iter()
        .map(|customer| CustomerListEntry {
            amount_display: format_inr(customer.amount),
            balance_display: format_inr(customer.balance),
            record: customer.clone(),
        })
        .collect();
    Json(entries)
}

pub async fn customer_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDetail>, AppError> {
    let lookup = directory::customer_profile(id);
    let fallback = lookup.is_fallback();
    let profile = lookup.into_record();

    let key = format!("customer-{}", profile.id);
    let items = state
        .carts
        .get(&key)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Cart '{}' not found", key)))?;

    Ok(Json(CustomerDetail {
        profile,
        fallback,
        cart: cart_view(&key, items),
    }))
}
