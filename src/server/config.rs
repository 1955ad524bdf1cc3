use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Public base URL of the API, used to build absolute pagination links.
    pub app_url: String,
    pub listen_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `APP_URL` are required, `LISTEN_ADDR` defaults to
    /// `0.0.0.0:8080`. `APP_URL` is checked here so that a bad value fails at startup
    /// instead of on the first paginated request.
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required_var("APP_URL")?;

        if let Err(err) = Url::parse(&app_url) {
            return Err(ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                reason: err.to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            app_url,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
