use serde::{Deserialize, Serialize};

use super::{de, AccountAddress, ResourceData};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowState {
    pub is_active: bool,
    pub is_funded: bool,
    pub is_released: bool,
    pub is_refunded: bool,
}

impl EscrowState {
    /// Whether the flags obey the contract's settlement rule: released and
    /// refunded are exclusive, and either one implies funded.
    ///
    /// Informational only; snapshots that break it are still displayed.
    pub fn is_consistent(&self) -> bool {
        if self.is_released && self.is_refunded {
            return false;
        }
        if (self.is_released || self.is_refunded) && !self.is_funded {
            return false;
        }
        true
    }

    pub fn is_settled(&self) -> bool {
        self.is_released || self.is_refunded
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escrow {
    pub creator: AccountAddress,
    pub contributor: AccountAddress,
    #[serde(deserialize_with = "de::decimal")]
    pub amount: String,
    pub state: EscrowState,
    #[serde(deserialize_with = "de::integer")]
    pub creation_time: u64,
}

impl ResourceData for Escrow {
    fn check(&self) -> Result<(), String> {
        if !self.state.is_consistent() {
            tracing::warn!(
                creator = %self.creator,
                state = ?self.state,
                "escrow snapshot violates settlement flags"
            );
        }
        Ok(())
    }
}
