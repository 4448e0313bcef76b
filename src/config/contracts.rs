use std::env;

use crate::models::AccountAddress;

use super::ConfigError;

/// Address the marketplace Move modules are published under.
pub const DEFAULT_MODULE_ADDRESS: &str =
    "0x3fec05744f9ae0b353bd3daa46bdaa16811aea3bd8688f0ca9ac2137308b2d8f";

pub const COIN_TYPE: &str = "0x1::aptos_coin::AptosCoin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractsConfig {
    pub module_address: AccountAddress,
}

impl ContractsConfig {
    pub fn new(module_address: AccountAddress) -> Self {
        Self { module_address }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("TIDMAT_MODULE_ADDRESS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODULE_ADDRESS.to_string());

        let module_address = raw
            .parse()
            .map_err(|_| ConfigError::InvalidModuleAddress(raw.clone()))?;

        Ok(Self { module_address })
    }

    pub fn campaign_resource(&self) -> String {
        format!("{}::campaign::Campaign", self.module_address)
    }

    pub fn escrow_resource(&self) -> String {
        format!("{}::escrow::Escrow", self.module_address)
    }

    pub fn contribution_resource(&self) -> String {
        format!("{}::contribution::Contribution", self.module_address)
    }

    /// Fully qualified `address::module::function` name.
    pub fn function(&self, module: &str, name: &str) -> String {
        format!("{}::{}::{}", self.module_address, module, name)
    }
}
