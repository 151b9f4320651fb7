//! Domain models for dashboard-service.

mod customer;
mod invoice;
mod vendor;

pub use customer::{Customer, CustomerProfile, ProductLine};
pub use invoice::{
    AccountStatus, CreateInvoice, Invoice, InvoiceStatus, ListInvoicesFilter, UpdateInvoice,
};
pub use vendor::{Vendor, VendorProfile};
