//! # motoadmin-entity
//!
//! Domain entity models for the MotoAdmin console. Every struct in this
//! crate represents either a raw backend record (as received over REST or
//! the push channel) or its normalized console-side value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod appointment;
pub mod invoice;
pub mod notification;
pub mod order;
