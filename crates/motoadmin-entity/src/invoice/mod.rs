//! Invoice value objects.

pub mod model;

pub use model::{Invoice, InvoiceLine, InvoiceStatus};
