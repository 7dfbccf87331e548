//! # motoadmin-client
//!
//! Authenticated REST client for the backend the console talks to. The
//! backend itself is not part of this repository; this crate consumes its
//! API surface and maps failures into [`AppError`](motoadmin_core::AppError).

pub mod api;
pub mod auth;
pub mod gateway;

pub use api::ApiClient;
pub use auth::AuthContext;
pub use gateway::NotificationGateway;
