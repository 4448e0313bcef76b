use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{error_message, AccountResource, ResourceReader, ViewRequest};
use crate::error::{Result, SdkError};
use crate::models::AccountAddress;

/// Aptos fullnode REST client.
#[derive(Clone)]
pub struct AptosRestClient {
    node_url: String,
    http: Client,
}

impl AptosRestClient {
    pub fn new(node_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(node_url, http))
    }

    pub fn with_client(node_url: impl Into<String>, http: Client) -> Self {
        let node_url = node_url.into().trim_end_matches('/').to_string();
        Self { node_url, http }
    }

    fn resource_url(&self, address: &AccountAddress, resource_type: &str) -> String {
        format!(
            "{}/accounts/{}/resource/{}",
            self.node_url, address, resource_type
        )
    }
}

#[async_trait]
impl ResourceReader for AptosRestClient {
    async fn account_resource(
        &self,
        address: &AccountAddress,
        resource_type: &str,
    ) -> Result<AccountResource> {
        let url = self.resource_url(address, resource_type);
        tracing::debug!(%url, "fetching account resource");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SdkError::ResourceNotFound {
                address: address.to_string(),
                resource_type: resource_type.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Node {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<AccountResource>()
            .await
            .map_err(|err| SdkError::decode(resource_type, err))
    }

    async fn view(&self, request: &ViewRequest) -> Result<Vec<Value>> {
        let url = format!("{}/view", self.node_url);
        tracing::debug!(%url, function = %request.function, "calling view function");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Node {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|err| SdkError::decode(&request.function, err))
    }
}
