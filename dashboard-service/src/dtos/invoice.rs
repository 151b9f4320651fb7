use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::InvoiceStatus;

/// Create/update payload for an invoice. The same shape serves both
/// operations; the update form omits nothing the create form carries.
#[derive(Debug, Deserialize, Validate)]
pub struct InvoicePayload {
    #[validate(required(message = "Please select a customer."))]
    pub customer_id: Option<Uuid>,

    /// Whole currency units (rupees).
    #[validate(range(exclusive_min = 0.0, message = "Please enter an amount greater than ₹0."))]
    pub amount: f64,

    #[validate(required(message = "Please select an invoice status."))]
    pub status: Option<InvoiceStatus>,
}

/// Query parameters for listing invoices.
#[derive(Debug, Deserialize, Default)]
pub struct ListInvoicesQuery {
    pub status: Option<InvoiceStatus>,
    pub customer_id: Option<Uuid>,
    #[serde(default = "default_page_size")]
    pub page_size: i32,
    pub page_token: Option<Uuid>,
}

fn default_page_size() -> i32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_rejected() {
        let payload: InvoicePayload = serde_json::from_value(serde_json::json!({
            "customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "amount": 0,
            "status": "pending",
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("amount"));
    }

    #[test]
    fn missing_customer_and_status_are_reported_per_field() {
        let payload: InvoicePayload = serde_json::from_value(serde_json::json!({
            "amount": 2500,
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("customer_id"));
        assert!(fields.contains_key("status"));
    }

    #[test]
    fn well_formed_payload_passes() {
        let payload: InvoicePayload = serde_json::from_value(serde_json::json!({
            "customer_id": "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            "amount": 15500.50,
            "status": "paid",
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }
}
