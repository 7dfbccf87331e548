//! Operator session configuration.

use serde::{Deserialize, Serialize};

/// Operator session settings.
///
/// The bearer token is injected explicitly at startup rather than read from
/// ambient storage. When no token is configured, the console runs in a
/// degraded read-only mode where every authenticated operation is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bearer token for the operator session, usually supplied through the
    /// `MOTOADMIN__SESSION__TOKEN` environment variable.
    #[serde(default)]
    pub token: Option<String>,
}
