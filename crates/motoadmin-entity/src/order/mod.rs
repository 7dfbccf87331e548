//! Order domain entities.

pub mod model;
pub mod raw;
pub mod status;

pub use model::{Order, OrderItem};
pub use raw::RawOrder;
pub use status::OrderStatus;
