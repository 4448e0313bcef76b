//! Typed access to the marketplace contract.
//!
//! Every public operation absorbs its own failures: reads return `None` and
//! writes return an unsuccessful [`TransactionResult`], with the cause logged.
//! The `fetch_*` variants expose the underlying [`SdkError`] for callers that
//! want it.

use std::sync::Arc;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use validator::Validate;

use crate::chain::{
    AptosRestClient, EntryFunctionPayload, NoWallet, ResourceReader, ViewRequest, WalletRelay,
    WalletSigner,
};
use crate::config::contracts::COIN_TYPE;
use crate::config::{AppConfig, ContractsConfig};
use crate::error::{Result, SdkError};
use crate::models::contribution::is_hex_hash;
use crate::models::{
    AccountAddress, Campaign, CampaignParams, ContractError, Contribution, Escrow, ResourceData,
    TransactionResult,
};

#[derive(Clone)]
pub struct TidmatSdk {
    contracts: ContractsConfig,
    reader: Arc<dyn ResourceReader>,
    signer: Arc<dyn WalletSigner>,
}

impl TidmatSdk {
    pub fn new(
        contracts: ContractsConfig,
        reader: Arc<dyn ResourceReader>,
        signer: Arc<dyn WalletSigner>,
    ) -> Self {
        Self {
            contracts,
            reader,
            signer,
        }
    }

    /// Fullnode client for the configured network, plus the wallet relay if one is set.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let reader = AptosRestClient::new(config.node_url.clone(), config.http_timeout)?;
        let signer: Arc<dyn WalletSigner> = match &config.wallet_relay_url {
            Some(url) => Arc::new(WalletRelay::new(url.clone(), config.http_timeout)?),
            None => {
                tracing::warn!("WALLET_RELAY_URL not set; transactions will be refused");
                Arc::new(NoWallet)
            }
        };
        Ok(Self::new(config.contracts.clone(), Arc::new(reader), signer))
    }

    // ===== Campaigns =====

    pub async fn get_campaign_details(&self, campaign_id: &str) -> Option<Campaign> {
        match self.fetch_campaign(campaign_id).await {
            Ok(campaign) => Some(campaign),
            Err(err) => {
                report_read_failure("campaign", campaign_id, &err);
                None
            }
        }
    }

    /// Reads the campaign resource under the module account and checks it is
    /// the one asked for.
    pub async fn fetch_campaign(&self, campaign_id: &str) -> Result<Campaign> {
        let resource_type = self.contracts.campaign_resource();
        let campaign: Campaign = self
            .fetch_resource(&self.contracts.module_address, &resource_type)
            .await?;

        if campaign.id != campaign_id {
            tracing::debug!(
                requested = campaign_id,
                found = %campaign.id,
                "campaign resource holds a different campaign"
            );
            return Err(SdkError::ResourceNotFound {
                address: self.contracts.module_address.to_string(),
                resource_type: format!("{resource_type} (id {campaign_id})"),
            });
        }
        Ok(campaign)
    }

    pub async fn get_campaign_status(&self, creator: &str) -> Option<u8> {
        match self.fetch_campaign_status(creator).await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::error!(creator, error = %err, "Error fetching campaign status");
                None
            }
        }
    }

    pub async fn fetch_campaign_status(&self, creator: &str) -> Result<u8> {
        let creator: AccountAddress = creator.parse()?;
        let request = ViewRequest {
            function: self.contracts.function("campaign", "get_campaign_status"),
            type_arguments: vec![],
            arguments: vec![json!(creator)],
        };

        let values = self.reader.view(&request).await?;
        let first = values
            .first()
            .ok_or_else(|| SdkError::decode(&request.function, "empty view result"))?;
        small_integer(first).ok_or_else(|| {
            SdkError::decode(&request.function, format!("`{first}` is not a status code"))
        })
    }

    pub async fn create_campaign(
        &self,
        sender: &AccountAddress,
        params: &CampaignParams,
    ) -> TransactionResult {
        if let Err(err) = params.validate() {
            tracing::warn!(%sender, error = %err, "rejecting campaign parameters");
            return TransactionResult::rejected(format!("invalid campaign parameters: {err}"));
        }

        let payload = EntryFunctionPayload::new(
            self.contracts.function("campaign", "create_campaign"),
            vec![COIN_TYPE.to_string()],
            vec![
                json!(params.total_reward_pool.to_string()),
                json!(format!("0x{}", hex::encode(params.data_type.as_bytes()))),
                json!(params.quality_threshold),
                json!(params.deadline.to_string()),
                json!(params.min_contributions.to_string()),
                json!(params.max_contributions.to_string()),
                json!(params.service_fee_percentage),
            ],
        );

        self.forward(sender, payload).await
    }

    // ===== Contributions =====

    pub async fn submit_contribution(
        &self,
        sender: &AccountAddress,
        campaign_id: &str,
        data_hash: &str,
    ) -> TransactionResult {
        if campaign_id.trim().is_empty() || !is_hex_hash(data_hash) {
            tracing::warn!(
                %sender,
                campaign_id,
                data_hash,
                "rejecting malformed contribution"
            );
            return TransactionResult::failed(ContractError::InvalidContribution);
        }

        let payload = EntryFunctionPayload::new(
            self.contracts.function("contribution", "submit_contribution"),
            vec![],
            vec![json!(campaign_id), json!(data_hash)],
        );

        self.forward(sender, payload).await
    }

    pub async fn get_contribution(
        &self,
        contributor: &str,
        contribution_id: &str,
    ) -> Option<Contribution> {
        match self.fetch_contribution(contributor, contribution_id).await {
            Ok(contribution) => Some(contribution),
            Err(err) => {
                report_read_failure("contribution", contribution_id, &err);
                None
            }
        }
    }

    pub async fn fetch_contribution(
        &self,
        contributor: &str,
        contribution_id: &str,
    ) -> Result<Contribution> {
        let contributor: AccountAddress = contributor.parse()?;
        let resource_type = self.contracts.contribution_resource();
        let contribution: Contribution = self.fetch_resource(&contributor, &resource_type).await?;

        if contribution.id != contribution_id {
            return Err(SdkError::ResourceNotFound {
                address: contributor.to_string(),
                resource_type: format!("{resource_type} (id {contribution_id})"),
            });
        }
        Ok(contribution)
    }

    // ===== Escrow =====

    pub async fn get_escrow_state(&self, creator: &str) -> Option<Escrow> {
        match self.fetch_escrow(creator).await {
            Ok(escrow) => Some(escrow),
            Err(err) => {
                report_read_failure("escrow", creator, &err);
                None
            }
        }
    }

    pub async fn fetch_escrow(&self, creator: &str) -> Result<Escrow> {
        let creator: AccountAddress = creator.parse()?;
        let resource_type = self.contracts.escrow_resource();
        self.fetch_resource(&creator, &resource_type).await
    }

    // ===== Private Helper Methods =====

    async fn fetch_resource<T: ResourceData>(
        &self,
        address: &AccountAddress,
        resource_type: &str,
    ) -> Result<T> {
        let resource = self.reader.account_resource(address, resource_type).await?;
        let data: T = serde_json::from_value(resource.data)
            .map_err(|err| SdkError::decode(resource_type, err))?;
        data.check()
            .map_err(|reason| SdkError::decode(resource_type, reason))?;
        Ok(data)
    }

    async fn forward(
        &self,
        sender: &AccountAddress,
        payload: EntryFunctionPayload,
    ) -> TransactionResult {
        match self.signer.sign_and_submit(sender, &payload).await {
            Ok(hash) => {
                tracing::info!(%sender, function = %payload.function, %hash, "transaction submitted");
                TransactionResult::submitted(hash)
            }
            Err(err) => {
                tracing::error!(%sender, function = %payload.function, error = %err, "Transaction failed");
                TransactionResult::failed(ContractError::TransactionFailed)
            }
        }
    }
}

/// Missing resources log at warn, other causes at error.
fn report_read_failure(what: &str, key: &str, err: &SdkError) {
    if err.is_not_found() {
        tracing::warn!(key, error = %err, "{what} not found");
    } else {
        tracing::error!(key, error = %err, "Error fetching {what}");
    }
}

/// SHA-256 of raw contribution data, `0x`-prefixed hex.
pub fn hash_contribution_data(data: &[u8]) -> String {
    format!("0x{}", hex::encode(Sha256::digest(data)))
}

fn small_integer(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    u8::try_from(raw).ok()
}
