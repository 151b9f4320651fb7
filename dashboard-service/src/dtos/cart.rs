use serde::Deserialize;

/// Quantity change for one cart line. Signed on purpose: values below 1 are
/// accepted and treated as a no-op rather than rejected.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}
