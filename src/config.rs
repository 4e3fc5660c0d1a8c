use dotenv::dotenv;
use std::env;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_SCRYFALL_URL: &str = "https://api.scryfall.com/cards/collection";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("SCRYFALL_API_URL is not a valid URL: {0}")]
    InvalidLookupUrl(#[from] url::ParseError),
}

/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub scryfall_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = var("PROXY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let scryfall_url =
            var("SCRYFALL_API_URL").unwrap_or_else(|| DEFAULT_SCRYFALL_URL.to_string());

        Ok(Config {
            bind,
            port,
            scryfall_url: Url::parse(&scryfall_url)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
