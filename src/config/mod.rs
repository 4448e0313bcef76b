//! Process configuration, read once at startup and shared immutably.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub mod contracts;
pub mod network;

pub use contracts::ContractsConfig;
pub use network::{NetworkInfo, NetworkName, NETWORKS};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown network `{0}` (expected mainnet, testnet or devnet)")]
    UnknownNetwork(String),

    #[error("invalid module address `{0}`")]
    InvalidModuleAddress(String),

    #[error("{name} must be a number, got `{value}`")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub network: NetworkName,
    pub node_url: String,
    pub contracts: ContractsConfig,
    pub wallet_relay_url: Option<String>,
    pub http_timeout: Duration,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Configuration pointing at `network` with every optional knob at its default.
    pub fn for_network(network: NetworkName, contracts: ContractsConfig) -> Self {
        Self {
            network,
            node_url: network.info().node_url.to_string(),
            contracts,
            wallet_relay_url: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
            port: DEFAULT_PORT,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let network = match non_empty_var("APTOS_NETWORK") {
            Some(name) => name.parse()?,
            None => NetworkName::default(),
        };

        let mut config = Self::for_network(network, ContractsConfig::from_env()?);

        if let Some(node_url) = non_empty_var("APTOS_NODE_URL") {
            config.node_url = node_url;
        }
        config.wallet_relay_url = non_empty_var("WALLET_RELAY_URL");

        if let Some(raw) = non_empty_var("HTTP_TIMEOUT_SECONDS") {
            let seconds = parse_number("HTTP_TIMEOUT_SECONDS", &raw)?;
            config.http_timeout = Duration::from_secs(seconds);
        }
        if let Some(raw) = non_empty_var("PORT") {
            config.port = parse_number("PORT", &raw)?;
        }
        if let Some(raw) = non_empty_var("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }

        Ok(config)
    }

    pub fn network_info(&self) -> &'static NetworkInfo {
        self.network.info()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: raw.to_string(),
    })
}
