//! REST client for the MotoAdmin backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;

use motoadmin_core::config::ApiConfig;
use motoadmin_core::error::{AppError, ErrorKind};
use motoadmin_core::result::AppResult;
use motoadmin_core::types::id::{NotificationId, OrderId};
use motoadmin_entity::appointment::{Appointment, RawAppointment};
use motoadmin_entity::notification::{CancellationAction, RawNotification};
use motoadmin_entity::order::{Order, RawOrder};

use crate::auth::AuthContext;
use crate::gateway::NotificationGateway;

/// Authenticated HTTP client for the backend REST API.
///
/// One instance per operator session; the bearer token is attached to
/// every request. Each call is a single attempt — retry policy belongs to
/// the caller, and for the feed that caller deliberately has none.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    auth: AuthContext,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ApiConfig, auth: AuthContext) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            auth,
        })
    }

    /// The auth context this client was built with.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach auth and send, folding transport and status failures into
    /// [`AppError`].
    async fn send(&self, request: RequestBuilder) -> AppResult<reqwest::Response> {
        let response = request
            .bearer_auth(self.auth.token())
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Network, format!("Request failed: {e}"), e)
            })?;

        response.error_for_status().map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Backend rejected request: {e}"),
                e,
            )
        })
    }

    /// Fetch all orders for the order table.
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let raw: Vec<RawOrder> = self
            .send(self.http.get(self.url("/api/order")))
            .await?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Serialization, "Invalid order list payload", e)
            })?;

        Ok(raw.into_iter().filter_map(Order::from_raw).collect())
    }

    /// Fetch all service appointments.
    pub async fn list_appointments(&self) -> AppResult<Vec<Appointment>> {
        let raw: Vec<RawAppointment> = self
            .send(self.http.get(self.url("/api/appointment")))
            .await?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    "Invalid appointment list payload",
                    e,
                )
            })?;

        Ok(raw.into_iter().filter_map(Appointment::from_raw).collect())
    }
}

#[async_trait]
impl NotificationGateway for ApiClient {
    async fn list_notifications(&self) -> AppResult<Vec<RawNotification>> {
        self.send(self.http.get(self.url("/api/notification")))
            .await?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    "Invalid notification list payload",
                    e,
                )
            })
    }

    async fn mark_read(&self, id: &NotificationId) -> AppResult<()> {
        self.send(
            self.http
                .patch(self.url(&format!("/api/notification/{id}/read"))),
        )
        .await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> AppResult<()> {
        self.send(self.http.put(self.url("/api/notification/mark-read")))
            .await?;
        Ok(())
    }

    async fn resolve_cancellation(
        &self,
        order_id: &OrderId,
        action: CancellationAction,
    ) -> AppResult<()> {
        let path = match action {
            CancellationAction::Accept => format!("/api/order/{order_id}/accept-cancel"),
            CancellationAction::Reject => format!("/api/order/{order_id}/reject-cancel"),
        };
        self.send(self.http.put(self.url(&path))).await?;
        tracing::info!("Cancellation {}ed for order {}", action, order_id);
        Ok(())
    }
}
