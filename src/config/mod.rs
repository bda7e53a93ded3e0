use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub common: CommonConfig,
    pub mongodb: MongoConfig,
    /// Upper bound on a single lookup round trip.
    pub query_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl UserConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let timeout_ms: u64 = get_env("QUERY_TIMEOUT_MS", Some("5000"), is_prod)?
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid QUERY_TIMEOUT_MS: {}", e))
            })?;

        Ok(UserConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("Centivo"), is_prod)?,
            },
            query_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
