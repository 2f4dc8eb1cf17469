/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * into one explicit value that is passed to the store client and the admin
 * gate at startup. Nothing reads the environment after startup and there
 * is no ambient global configuration.
 *
 * # Configuration Sources
 *
 * Required:
 * - `BIN_ID` - id of the remote document (bin) holding all collections
 * - `BIN_MASTER_KEY` - credential for the document store
 * - `ADMIN_KEY` - shared secret for the admin gate
 *
 * Optional:
 * - `JSONBIN_BASE_URL` - store endpoint (defaults to the public JSONBin v3 API)
 * - `CODES_REQUIRE_ADMIN` - gate snippet creation behind the admin key (default off)
 * - `SERVER_PORT` - listen port (default 3000)
 *
 * # Error Handling
 *
 * Unlike optional services, the document store is this server's only
 * persistence, so a missing required variable fails startup instead of
 * degrading.
 */

use thiserror::Error;

use crate::backend::store::client::DEFAULT_BASE_URL;

/// Startup configuration failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Explicit server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Id of the remote document holding all collections
    pub bin_id: String,
    /// Credential sent to the document store on every request
    pub master_key: String,
    /// Shared secret the admin gate compares against
    pub admin_key: String,
    /// Document store endpoint
    pub store_base_url: String,
    /// Whether snippet creation requires the admin key
    pub protect_code_posts: bool,
    /// Listen port
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let bin_id = require("BIN_ID")?;
        let master_key = require("BIN_MASTER_KEY")?;
        let admin_key = require("ADMIN_KEY")?;

        let store_base_url = std::env::var("JSONBIN_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let protect_code_posts = std::env::var("CODES_REQUIRE_ADMIN")
            .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);

        Ok(Self {
            bin_id,
            master_key,
            admin_key,
            store_base_url,
            protect_code_posts,
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            tracing::error!("{} is not set; the server cannot start without it", name);
            Err(ConfigError::MissingVar(name))
        }
    }
}
