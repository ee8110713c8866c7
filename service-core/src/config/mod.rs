use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings every binary in the workspace shares.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// HTTP listen port. 0 asks the OS for a free port, which integration
    /// tests rely on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load from an optional `configuration` file, with `APP__`-prefixed
    /// environment variables taking precedence. A `.env` file is honored
    /// for local development.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
