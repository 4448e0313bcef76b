//! Static Aptos network table

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ConfigError;

/// One of the public Aptos networks the marketplace can run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

/// Endpoint and identity of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub network: NetworkName,
    pub node_url: &'static str,
    pub name: &'static str,
    pub chain_id: &'static str,
}

pub static NETWORKS: [NetworkInfo; 3] = [
    NetworkInfo {
        network: NetworkName::Mainnet,
        node_url: "https://fullnode.mainnet.aptoslabs.com/v1",
        name: "Mainnet",
        chain_id: "1",
    },
    NetworkInfo {
        network: NetworkName::Testnet,
        node_url: "https://fullnode.testnet.aptoslabs.com/v1",
        name: "Testnet",
        chain_id: "2",
    },
    NetworkInfo {
        network: NetworkName::Devnet,
        node_url: "https://fullnode.devnet.aptoslabs.com/v1",
        name: "Devnet",
        chain_id: "3",
    },
];

impl NetworkName {
    pub fn info(self) -> &'static NetworkInfo {
        match self {
            NetworkName::Mainnet => &NETWORKS[0],
            NetworkName::Testnet => &NETWORKS[1],
            NetworkName::Devnet => &NETWORKS[2],
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetworkName::Mainnet => "mainnet",
            NetworkName::Testnet => "testnet",
            NetworkName::Devnet => "devnet",
        };
        f.write_str(label)
    }
}

impl FromStr for NetworkName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkName::Mainnet),
            "testnet" => Ok(NetworkName::Testnet),
            "devnet" => Ok(NetworkName::Devnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table() {
        for entry in NETWORKS.iter() {
            assert_eq!(entry.network.info(), entry);
        }
        assert_eq!(NetworkName::Testnet.info().chain_id, "2");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MainNet".parse::<NetworkName>().unwrap(), NetworkName::Mainnet);
        assert_eq!(" devnet ".parse::<NetworkName>().unwrap(), NetworkName::Devnet);
        assert!("localnet".parse::<NetworkName>().is_err());
    }
}
