use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use dashboard_core::error::AppError;

use crate::AppState;
use crate::dtos::{InvoicePayload, ListInvoicesQuery};
use crate::models::{CreateInvoice, Invoice, ListInvoicesFilter, UpdateInvoice};
use crate::services::metrics::INVOICES_TOTAL;

/// Validate the payload and convert the amount to its decimal form,
/// rounded to paise.
fn validated_fields(payload: InvoicePayload) -> Result<(Uuid, Decimal, &'static str), AppError> {
    payload.validate()?;

    // `required` validation ran above; these cannot be None here.
    let customer_id = payload
        .customer_id
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Please select a customer.")))?;
    let status = payload
        .status
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Please select an invoice status.")))?;
    let amount = Decimal::from_f64_retain(payload.amount)
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Amount is not a valid number.")))?
        .round_dp(2);

    Ok((customer_id, amount, status.as_str()))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<InvoicePayload>,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    let (customer_id, amount, status) = validated_fields(payload)?;

    let invoice = state
        .db
        .create_invoice(&CreateInvoice {
            customer_id,
            amount,
            status: crate::models::InvoiceStatus::from_string(status),
        })
        .await?;

    INVOICES_TOTAL.with_label_values(&["create", status]).inc();

    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Invoice>, AppError> {
    let invoice = state
        .db
        .get_invoice(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice with ID {} not found", id)))?;
    Ok(Json(invoice))
}

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> Result<Json<Vec<Invoice>>, AppError> {
    let invoices = state
        .db
        .list_invoices(&ListInvoicesFilter {
            status: query.status,
            customer_id: query.customer_id,
            page_size: query.page_size,
            page_token: query.page_token,
        })
        .await?;
    Ok(Json(invoices))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<InvoicePayload>,
) -> Result<Json<Invoice>, AppError> {
    let (customer_id, amount, status) = validated_fields(payload)?;

    let invoice = state
        .db
        .update_invoice(
            id,
            &UpdateInvoice {
                customer_id,
                amount,
                status: crate::models::InvoiceStatus::from_string(status),
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice with ID {} not found", id)))?;

    INVOICES_TOTAL.with_label_values(&["update", status]).inc();

    Ok(Json(invoice))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.db.delete_invoice(id).await?;

    INVOICES_TOTAL.with_label_values(&["delete", ""]).inc();

    Ok(StatusCode::NO_CONTENT)
}
