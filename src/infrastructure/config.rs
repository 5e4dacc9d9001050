use anyhow::{Context, Result};
use std::env;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
}

impl AppConfig {
    /// Reads configuration from the environment, honoring a `.env` file when
    /// one is present. `JWT_SECRET` is required.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let jwt_secret =
            env::var("JWT_SECRET").context("JWT_SECRET must be set in the environment")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        debug!(bind_addr = %bind_addr, "Configuration loaded from environment");

        Ok(Self {
            bind_addr,
            jwt_secret,
        })
    }
}
