//! Service appointment domain entities.

pub mod model;

pub use model::{Appointment, AppointmentStatus, PaymentStatus, RawAppointment};
