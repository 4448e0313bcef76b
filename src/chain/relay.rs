use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{error_message, EntryFunctionPayload, WalletSigner};
use crate::error::{Result, SdkError};
use crate::models::AccountAddress;

/// Forwards payloads to an external wallet that holds the user's keys.
///
/// The relay answers `POST /transactions/sign_and_submit` with `{"hash": ...}`
/// once the transaction is broadcast, or a non-2xx status if the user or the
/// node rejected it.
#[derive(Clone)]
pub struct WalletRelay {
    relay_url: String,
    http: Client,
}

#[derive(Serialize)]
struct SignRequest<'a> {
    sender: &'a AccountAddress,
    payload: &'a EntryFunctionPayload,
}

#[derive(Deserialize)]
struct SignResponse {
    hash: String,
}

impl WalletRelay {
    pub fn new(relay_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(relay_url, http))
    }

    pub fn with_client(relay_url: impl Into<String>, http: Client) -> Self {
        let relay_url = relay_url.into().trim_end_matches('/').to_string();
        Self { relay_url, http }
    }
}

#[async_trait]
impl WalletSigner for WalletRelay {
    async fn sign_and_submit(
        &self,
        sender: &AccountAddress,
        payload: &EntryFunctionPayload,
    ) -> Result<String> {
        let url = format!("{}/transactions/sign_and_submit", self.relay_url);
        tracing::info!(%sender, function = %payload.function, "forwarding payload to wallet");

        let response = self
            .http
            .post(&url)
            .json(&SignRequest { sender, payload })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::WalletRejected(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_message(&body)
            )));
        }

        let signed: SignResponse = response
            .json()
            .await
            .map_err(|err| SdkError::WalletRejected(format!("malformed relay response: {err}")))?;

        if signed.hash.trim().is_empty() {
            return Err(SdkError::WalletRejected("relay returned an empty hash".to_string()));
        }
        Ok(signed.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use crate::testing::{direct_client, serve_stub};

    /// Relay whose answer depends on the function name in the payload.
    async fn sign_and_submit(Json(body): Json<Value>) -> (StatusCode, String) {
        if body["sender"] != "0xbeef" {
            return (StatusCode::BAD_REQUEST, json!({"message": "missing sender"}).to_string());
        }
        let function = body["payload"]["function"].as_str().unwrap_or_default();
        match function {
            "0x1::m::accept" => (StatusCode::OK, json!({"hash": "0xfeed"}).to_string()),
            "0x1::m::decline" => (
                StatusCode::FORBIDDEN,
                json!({"message": "user declined"}).to_string(),
            ),
            "0x1::m::blank" => (StatusCode::OK, json!({"hash": ""}).to_string()),
            _ => (StatusCode::OK, "<html>not json</html>".to_string()),
        }
    }

    async fn relay() -> WalletRelay {
        let url = serve_stub(
            Router::new().route("/transactions/sign_and_submit", post(sign_and_submit)),
        )
        .await;
        WalletRelay::with_client(format!("{url}/"), direct_client())
    }

    fn payload(function: &str) -> EntryFunctionPayload {
        EntryFunctionPayload::new(function.to_string(), vec![], vec![json!("1")])
    }

    #[tokio::test]
    async fn returns_hash_from_relay() {
        let relay = relay().await;
        let sender: AccountAddress = "0xbeef".parse().unwrap();
        let hash = relay
            .sign_and_submit(&sender, &payload("0x1::m::accept"))
            .await
            .unwrap();
        assert_eq!(hash, "0xfeed");
    }

    #[tokio::test]
    async fn non_success_status_is_a_rejection() {
        let relay = relay().await;
        let sender: AccountAddress = "0xbeef".parse().unwrap();
        let err = relay
            .sign_and_submit(&sender, &payload("0x1::m::decline"))
            .await
            .unwrap_err();
        match err {
            SdkError::WalletRejected(reason) => {
                assert_eq!(reason, "HTTP 403: user declined");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_or_malformed_answers_are_rejections() {
        let relay = relay().await;
        let sender: AccountAddress = "0xbeef".parse().unwrap();

        let err = relay
            .sign_and_submit(&sender, &payload("0x1::m::blank"))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::WalletRejected(_)));

        let err = relay
            .sign_and_submit(&sender, &payload("0x1::m::garbled"))
            .await
            .unwrap_err();
        match err {
            SdkError::WalletRejected(reason) => {
                assert!(reason.starts_with("malformed relay response"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
