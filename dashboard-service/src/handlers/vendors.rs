use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use dashboard_core::error::AppError;
use order_core::format_inr;

use crate::AppState;
use crate::handlers::cart::{CartView, cart_view};
use crate::models::{Vendor, VendorProfile};
use crate::services::directory;

#[derive(Debug, Serialize)]
pub struct VendorListEntry {
    #[serde(flatten)]
    pub record: Vendor,
    pub amount_display: String,
    pub balance_display: String,
}

#[derive(Debug, Serialize)]
pub struct VendorDetail {
    pub profile: VendorProfile,
    pub total_pending_display: String,
    /// True when the requested id was unknown and the default record was
    /// substituted.
    pub fallback: bool,
    pub cart: CartView,
}

pub async fn list_vendors() -> Json<Vec<VendorListEntry>> {
    let entries = directory::vendors()
        .iter()
        .map(|vendor| VendorListEntry {
            amount_display: format_inr(vendor.amount),
            balance_display: format_inr(vendor.balance),
            record: vendor.clone(),
        })
        .collect();
    Json(entries)
}

pub async fn vendor_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VendorDetail>, AppError> {
    let lookup = directory::vendor_profile(id);
    let fallback = lookup.is_fallback();
    let profile = lookup.into_record();

    let key = format!("vendor-{}", profile.id);
    let items = state
        .carts
        .get(&key)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Cart '{}' not found", key)))?;

    Ok(Json(VendorDetail {
        total_pending_display: format_inr(profile.total_pending),
        profile,
        fallback,
        cart: cart_view(&key, items),
    }))
}
