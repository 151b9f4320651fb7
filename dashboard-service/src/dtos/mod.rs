//! Request payloads for dashboard-service.

mod auth;
mod cart;
mod invoice;

pub use auth::LoginRequest;
pub use cart::UpdateQuantityRequest;
pub use invoice::{InvoicePayload, ListInvoicesQuery};
