use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ADDRESS_LOOKUP_URL: &str = "https://viacep.com.br/ws";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Base URL of the postal code lookup service.
    pub address_lookup_url: Url,

    /// Allowed browser origin. `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let address_lookup_url = std::env::var("ADDRESS_LOOKUP_URL")
            .unwrap_or_else(|_| DEFAULT_ADDRESS_LOOKUP_URL.to_string());
        let address_lookup_url =
            Url::parse(&address_lookup_url).map_err(|e| ConfigError::InvalidEnvVar {
                name: "ADDRESS_LOOKUP_URL".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            address_lookup_url,
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }
}
