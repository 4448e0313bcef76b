//! Data models for the Tidmat marketplace

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod address;
pub mod campaign;
pub mod contribution;
pub mod de;
pub mod escrow;

pub use address::{AccountAddress, InvalidAddress};
pub use campaign::{Campaign, CampaignParams};
pub use contribution::{Contribution, ContributionRequest, VerificationProof};
pub use escrow::{Escrow, EscrowState};

/// A typed view of an on-chain resource's `data` object.
pub trait ResourceData: DeserializeOwned {
    /// Structural invariants serde cannot express.
    fn check(&self) -> Result<(), String>;
}

/// Failure classification handed to callers, assigned by which operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractError {
    CampaignNotFound,
    EscrowNotFound,
    InvalidContribution,
    TransactionFailed,
}

impl ContractError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractError::CampaignNotFound => "CAMPAIGN_NOT_FOUND",
            ContractError::EscrowNotFound => "ESCROW_NOT_FOUND",
            ContractError::InvalidContribution => "INVALID_CONTRIBUTION",
            ContractError::TransactionFailed => "TRANSACTION_FAILED",
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error carried by a failed transaction: a classified kind or a free-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionError {
    Contract(ContractError),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TransactionError>,
}

impl TransactionResult {
    pub fn submitted(hash: impl Into<String>) -> Self {
        Self {
            success: true,
            hash: Some(hash.into()),
            error: None,
        }
    }

    pub fn failed(kind: ContractError) -> Self {
        Self {
            success: false,
            hash: None,
            error: Some(TransactionError::Contract(kind)),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            hash: None,
            error: Some(TransactionError::Message(message.into())),
        }
    }

    /// Classified failure, if any. Free-form rejections count as failed transactions.
    pub fn contract_error(&self) -> Option<ContractError> {
        match &self.error {
            Some(TransactionError::Contract(kind)) => Some(*kind),
            Some(TransactionError::Message(_)) => Some(ContractError::TransactionFailed),
            None if !self.success => Some(ContractError::TransactionFailed),
            None => None,
        }
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contract_error_labels() {
        assert_eq!(
            serde_json::to_value(ContractError::CampaignNotFound).unwrap(),
            json!("CAMPAIGN_NOT_FOUND")
        );
        let parsed: ContractError = serde_json::from_value(json!("TRANSACTION_FAILED")).unwrap();
        assert_eq!(parsed, ContractError::TransactionFailed);
        assert_eq!(ContractError::EscrowNotFound.to_string(), "ESCROW_NOT_FOUND");
    }

    #[test]
    fn transaction_result_shape() {
        let ok = TransactionResult::submitted("0x99");
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"success": true, "hash": "0x99"}));
        assert_eq!(ok.contract_error(), None);

        let failed = TransactionResult::failed(ContractError::InvalidContribution);
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"success": false, "error": "INVALID_CONTRIBUTION"})
        );

        let rejected: TransactionResult =
            serde_json::from_value(json!({"success": false, "error": "user rejected"})).unwrap();
        assert_eq!(
            rejected.error,
            Some(TransactionError::Message("user rejected".to_string()))
        );
        assert_eq!(rejected.contract_error(), Some(ContractError::TransactionFailed));
    }
}
