//! MotoAdmin Console — operator data layer for the motorcycle parts and
//! service shop.
//!
//! Main entry point that wires the auth context, REST client, push
//! channel, and notification feed together and runs the feed loop until
//! shutdown.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use motoadmin_client::api::ApiClient;
use motoadmin_client::auth::AuthContext;
use motoadmin_client::gateway::NotificationGateway;
use motoadmin_core::config::AppConfig;
use motoadmin_core::error::AppError;
use motoadmin_feed::NotificationFeed;
use motoadmin_realtime::channel::PushChannel;
use motoadmin_realtime::socket::SocketChannel;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("MOTOADMIN_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main console run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MotoAdmin console v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Auth context ─────────────────────────────────────
    let client = match &config.session.token {
        Some(token) => {
            let auth = AuthContext::from_token(token.clone())?;
            if auth.is_expired() {
                tracing::warn!("Session token is expired; the backend will reject requests");
            }
            tracing::info!(
                "Authenticated as user {} (role: {})",
                auth.user_id.as_ref().map(|id| id.as_str()).unwrap_or("?"),
                auth.role.as_deref().unwrap_or("?")
            );
            Some(Arc::new(ApiClient::new(&config.api, auth)?))
        }
        None => {
            tracing::warn!("No session token configured; running without backend access");
            None
        }
    };

    // ── Step 2: Startup dashboard counts ─────────────────────────
    if let Some(client) = &client {
        match client.list_orders().await {
            Ok(orders) => tracing::info!("{} orders on file", orders.len()),
            Err(e) => tracing::warn!("Could not fetch orders: {}", e),
        }
        match client.list_appointments().await {
            Ok(appointments) => tracing::info!("{} appointments on file", appointments.len()),
            Err(e) => tracing::warn!("Could not fetch appointments: {}", e),
        }
    }

    // ── Step 3: Push channel + feed ──────────────────────────────
    let channel = SocketChannel::connect(config.realtime.clone());
    let subscription = channel.subscribe();

    let gateway: Option<Arc<dyn NotificationGateway>> =
        client.map(|c| c as Arc<dyn NotificationGateway>);
    let mut feed = NotificationFeed::new(gateway);

    tracing::info!("Notification feed running");
    tokio::select! {
        _ = feed.run(subscription) => {
            tracing::warn!("Feed loop ended (push channel closed)");
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!(
        "Stopping with {} notifications ({} unread)",
        feed.notifications().len(),
        feed.unread_count()
    );
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
