use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` is set and optional values parse
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or an unparsable optional value
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_optional_var("PORT", DEFAULT_PORT)?,
            database_max_connections: parse_optional_var(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }
}

fn parse_optional_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        }
        _ => Ok(default),
    }
}
