//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod api;
pub mod logging;
pub mod realtime;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::realtime::RealtimeConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend REST API settings.
    pub api: ApiConfig,
    /// Push-channel settings.
    pub realtime: RealtimeConfig,
    /// Operator session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and `MOTOADMIN__SECTION__KEY` environment variables (e.g.
    /// `MOTOADMIN__SESSION__TOKEN`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("MOTOADMIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config = from_toml(
            r#"
            [api]
            base_url = "http://localhost:5000"

            [realtime]
            url = "ws://localhost:5000/ws"
            "#,
        );

        assert_eq!(config.api.request_timeout_seconds, 15);
        assert_eq!(config.realtime.reconnect_attempts, 10);
        assert_eq!(config.realtime.reconnect_delay_ms, 2000);
        assert_eq!(config.realtime.channel_buffer_size, 256);
        assert_eq!(config.session.token, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = from_toml(
            r#"
            [api]
            base_url = "http://localhost:5000"
            request_timeout_seconds = 3

            [realtime]
            url = "ws://localhost:5000/ws"
            reconnect_attempts = 2

            [session]
            token = "abc"

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert_eq!(config.api.request_timeout_seconds, 3);
        assert_eq!(config.realtime.reconnect_attempts, 2);
        assert_eq!(config.session.token.as_deref(), Some("abc"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_required_section_is_an_error() {
        let result = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [api]
                base_url = "http://localhost:5000"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }
}
