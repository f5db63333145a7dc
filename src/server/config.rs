use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Port used when `PORT` is not set
pub static DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(port) => Self::parse_port(&port)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }

    fn parse_port(value: &str) -> Result<u16, ConfigError> {
        value
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })
    }
}
