//! Application settings loaded via OrthoConfig.
//!
//! Values are layered from configuration files, `RECIPES_*` environment
//! variables and command-line flags. Every field is optional; accessors
//! supply the defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Runtime configuration for the recipe backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct AppSettings {
    /// Address the HTTP server binds to.
    pub host: Option<IpAddr>,
    /// Port the HTTP server binds to.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it carts are served from the
    /// fixture repository and are always empty.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Minimum number of idle database connections kept open.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection before failing.
    pub db_connection_timeout_secs: Option<u64>,
    /// File holding the session signing key shared with the auth service.
    pub session_key_file: Option<PathBuf>,
    /// Whether session cookies carry the `Secure` attribute.
    pub session_cookie_secure: Option<bool>,
    /// `SameSite` policy for session cookies: `Strict`, `Lax` or `None`.
    pub session_same_site: Option<String>,
    /// Fall back to a random session key when the key file is unreadable.
    #[ortho_config(default = false)]
    pub allow_ephemeral_session_key: bool,
}

impl AppSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Pool configuration, when a database URL is configured.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let mut config = PoolConfig::new(url);
        if let Some(max_size) = self.db_max_connections {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.db_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(secs) = self.db_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }

    /// Path of the session key file.
    #[must_use]
    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }
}
