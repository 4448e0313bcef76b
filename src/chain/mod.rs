//! Blockchain read and write interfaces consumed by the SDK.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SdkError};
use crate::models::AccountAddress;

mod relay;
mod rest;

pub use relay::WalletRelay;
pub use rest::AptosRestClient;

/// Account resource as returned by the fullnode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub data: Value,
}

/// Body of a `POST /view` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRequest {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

/// Entry-function payload handed to a wallet for signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
}

impl EntryFunctionPayload {
    pub fn new(function: String, type_arguments: Vec<String>, arguments: Vec<Value>) -> Self {
        Self {
            kind: "entry_function_payload".to_string(),
            function,
            type_arguments,
            arguments,
        }
    }
}

/// Read side: fetch resources by `(address, type)` and evaluate view functions.
#[async_trait]
pub trait ResourceReader: Send + Sync {
    async fn account_resource(
        &self,
        address: &AccountAddress,
        resource_type: &str,
    ) -> Result<AccountResource>;

    async fn view(&self, request: &ViewRequest) -> Result<Vec<Value>>;
}

/// Write side: a key holder that signs and broadcasts on request.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Returns the transaction hash once the wallet has broadcast it.
    async fn sign_and_submit(
        &self,
        sender: &AccountAddress,
        payload: &EntryFunctionPayload,
    ) -> Result<String>;
}

/// Signer used when no wallet relay is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWallet;

#[async_trait]
impl WalletSigner for NoWallet {
    async fn sign_and_submit(
        &self,
        _sender: &AccountAddress,
        _payload: &EntryFunctionPayload,
    ) -> Result<String> {
        Err(SdkError::WalletUnavailable)
    }
}

/// Pull the fullnode's `message` field out of an error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
