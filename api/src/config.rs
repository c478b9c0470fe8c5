//! Server configuration from environment variables

use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;

mod defaults {
    pub const API_HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const DATABASE_MAX_CONNECTIONS: u32 = pulse_db::defaults::DATABASE_MAX_CONNECTIONS;
    pub const PRICE_FEED_ADDRESS: &str = pulse_feeds::price::aggregator::ETH_USD_FEED_SEPOLIA;
    pub const CHAINLINK_API_URL: &str = pulse_feeds::price::chainlink_api::CHAINLINK_API_URL;
    pub const FALLBACK_ETH_PRICE: f64 = pulse_feeds::price::defaults::FALLBACK_ETH_PRICE;
    pub const TWITTER_API_BASE: &str = pulse_feeds::twitter::client::TWITTER_API_BASE;
    pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid `{key}` environment variable: `{value}`")]
    InvalidEnvVar { key: &'static str, value: String },

    #[error("Invalid listen address: `{0}`")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// JSON-RPC endpoint for reading the onchain price feed
    pub price_rpc_url: Option<String>,
    pub price_feed_address: String,
    pub chainlink_api_url: String,
    pub chainlink_api_key: Option<String>,
    pub fallback_eth_price: f64,
    pub twitter_bearer_token: Option<String>,
    pub twitter_api_base: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fallback_eth_price =
            parse_or(&var, "FALLBACK_ETH_PRICE", defaults::FALLBACK_ETH_PRICE)?;
        if !(fallback_eth_price.is_finite() && fallback_eth_price > 0.0) {
            return Err(ConfigError::InvalidEnvVar {
                key: "FALLBACK_ETH_PRICE",
                value: fallback_eth_price.to_string(),
            });
        }

        Ok(Self {
            host: var("API_HOST").unwrap_or_else(|| defaults::API_HOST.to_string()),
            port: parse_or(&var, "PORT", defaults::PORT)?,
            database_url: var("DATABASE_URL"),
            database_max_connections: parse_or(
                &var,
                "DATABASE_MAX_CONNECTIONS",
                defaults::DATABASE_MAX_CONNECTIONS,
            )?,
            price_rpc_url: var("PRICE_RPC_URL"),
            price_feed_address: var("PRICE_FEED_ADDRESS")
                .unwrap_or_else(|| defaults::PRICE_FEED_ADDRESS.to_string()),
            chainlink_api_url: var("CHAINLINK_API_URL")
                .unwrap_or_else(|| defaults::CHAINLINK_API_URL.to_string()),
            chainlink_api_key: var("CHAINLINK_API_KEY"),
            fallback_eth_price,
            twitter_bearer_token: var("TWITTER_BEARER_TOKEN"),
            twitter_api_base: var("TWITTER_API_BASE")
                .unwrap_or_else(|| defaults::TWITTER_API_BASE.to_string()),
            upstream_timeout: Duration::from_secs(parse_or(
                &var,
                "UPSTREAM_TIMEOUT_SECS",
                defaults::UPSTREAM_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_or<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar { key, value }),
        None => Ok(default),
    }
}
