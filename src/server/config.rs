/**
 * Server Configuration
 *
 * Loads server configuration from the environment once at startup into an
 * explicit struct that is passed down; nothing below `main` reads the
 * environment. The struct selects the database backend (in-memory for
 * tests, a remote URL with TLS for production) and a statement-logging
 * switch for development diagnostics.
 */

use std::str::FromStr;

use sqlx::any::{install_default_drivers, AnyConnectOptions, AnyPoolOptions};
use sqlx::{AnyPool, ConnectOptions};
use thiserror::Error;

/// Default port when `PORT` is unset
const DEFAULT_PORT: u16 = 3000;

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token signing secret was not supplied
    #[error("TOKEN_SECRET must be set")]
    MissingSecret,

    /// The port could not be parsed
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Database backend selection
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    /// In-process SQLite held entirely in memory; used by the test suite
    Memory,
    /// A remote database reached over the network
    Remote {
        /// Connection URL
        url: String,
        /// Force TLS on PostgreSQL connections
        require_tls: bool,
        /// Log every executed statement at debug level
        log_statements: bool,
    },
}

impl DatabaseConfig {
    /// Open a connection pool for the configured backend
    ///
    /// The in-memory backend pins the pool to one never-expiring connection:
    /// each new SQLite `:memory:` connection is a fresh empty database, so
    /// the pool must keep reusing the same one.
    pub async fn connect(&self) -> Result<AnyPool, sqlx::Error> {
        install_default_drivers();

        match self {
            Self::Memory => {
                AnyPoolOptions::new()
                    .min_connections(1)
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect("sqlite::memory:")
                    .await
            }
            Self::Remote {
                url,
                require_tls,
                log_statements,
            } => {
                let url = if *require_tls {
                    with_tls_required(url)
                } else {
                    url.clone()
                };

                let mut options = AnyConnectOptions::from_str(&url)?;
                if *log_statements {
                    options = options.log_statements(log::LevelFilter::Debug);
                }

                AnyPoolOptions::new()
                    .max_connections(5)
                    .connect_with(options)
                    .await
            }
        }
    }
}

/// Append `sslmode=require` to a PostgreSQL URL that does not already pin
/// an ssl mode. Non-PostgreSQL URLs are returned unchanged.
fn with_tls_required(url: &str) -> String {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return url.to_string();
    }
    if url.contains("sslmode=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}sslmode=require", url, separator)
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Secret used to sign and verify bearer tokens; never logged
    pub token_secret: String,
    /// Database backend selection
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Reads:
    /// - `TOKEN_SECRET` (required) - token signing secret
    /// - `PORT` (default 3000)
    /// - `DATABASE_URL` - remote database; in-memory SQLite when unset
    /// - `DATABASE_REQUIRE_TLS` (default true) - force TLS for PostgreSQL
    /// - `DATABASE_LOG_STATEMENTS` (default false) - statement logging
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret = std::env::var("TOKEN_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database = match std::env::var("DATABASE_URL") {
            Ok(url) => DatabaseConfig::Remote {
                url,
                require_tls: env_flag("DATABASE_REQUIRE_TLS", true),
                log_statements: env_flag("DATABASE_LOG_STATEMENTS", false),
            },
            Err(_) => {
                tracing::warn!("DATABASE_URL not set; using an in-memory database");
                DatabaseConfig::Memory
            }
        };

        Ok(Self {
            port,
            token_secret,
            database,
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
