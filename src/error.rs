//! Internal error causes. Callers only ever see [`ContractError`], assigned
//! by the operation that failed; these variants exist for logging.
//!
//! [`ContractError`]: crate::models::ContractError

use thiserror::Error;

use crate::models::InvalidAddress;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resource {resource_type} not found under {address}")]
    ResourceNotFound {
        address: String,
        resource_type: String,
    },

    #[error("node returned HTTP {status}: {message}")]
    Node { status: u16, message: String },

    #[error("failed to decode {resource_type}: {reason}")]
    Decode {
        resource_type: String,
        reason: String,
    },

    #[error("{0}")]
    InvalidAddress(#[from] InvalidAddress),

    #[error("no wallet is available to sign transactions")]
    WalletUnavailable,

    #[error("wallet rejected transaction: {0}")]
    WalletRejected(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;

impl SdkError {
    pub fn decode(resource_type: impl Into<String>, reason: impl ToString) -> Self {
        SdkError::Decode {
            resource_type: resource_type.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::ResourceNotFound { .. })
    }
}
