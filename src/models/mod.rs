//! Response models for the SInvoice mock.

mod health;
mod invoice;

pub use health::HealthStatus;
pub use invoice::{InvoiceResponse, InvoiceResult};
