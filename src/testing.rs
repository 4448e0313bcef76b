//! In-memory chain and wallet doubles shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use crate::chain::{AccountResource, EntryFunctionPayload, ResourceReader, ViewRequest, WalletSigner};
use crate::config::ContractsConfig;
use crate::error::{Result, SdkError};
use crate::models::AccountAddress;
use crate::sdk::TidmatSdk;

pub const MODULE: &str = "0xabc";

pub fn contracts() -> ContractsConfig {
    ContractsConfig::new(MODULE.parse().unwrap())
}

pub fn campaign_json(id: &str) -> Value {
    json!({
        "id": id,
        "creator": "0xc0ffee",
        "total_reward_pool": "500",
        "data_type": "0x736c656570",
        "quality_threshold": 80,
        "deadline": "1700000000",
        "min_contributions": "1",
        "max_contributions": "10",
        "service_fee_percentage": 5,
        "status": 0
    })
}

pub fn escrow_json(creator: &str) -> Value {
    json!({
        "creator": creator,
        "contributor": "0xbeef",
        "amount": "250",
        "state": {
            "is_active": true,
            "is_funded": true,
            "is_released": false,
            "is_refunded": false
        },
        "creation_time": "1700000000"
    })
}

#[derive(Default)]
pub struct FakeChain {
    resources: Mutex<HashMap<(String, String), Value>>,
    views: Mutex<HashMap<String, Vec<Value>>>,
    offline: Mutex<bool>,
    delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
}

impl FakeChain {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put(&self, address: &str, resource_type: &str, data: Value) {
        self.resources
            .lock()
            .unwrap()
            .insert((address.to_string(), resource_type.to_string()), data);
    }

    pub fn put_view(&self, function: &str, result: Vec<Value>) {
        self.views.lock().unwrap().insert(function.to_string(), result);
    }

    /// Every call fails with a transport-level error.
    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.offline.lock().unwrap() {
            return Err(SdkError::Node {
                status: 503,
                message: "simulated network error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceReader for FakeChain {
    async fn account_resource(
        &self,
        address: &AccountAddress,
        resource_type: &str,
    ) -> Result<AccountResource> {
        self.enter().await?;
        let key = (address.to_string(), resource_type.to_string());
        let data = self.resources.lock().unwrap().get(&key).cloned();
        match data {
            Some(data) => Ok(AccountResource {
                resource_type: resource_type.to_string(),
                data,
            }),
            None => Err(SdkError::ResourceNotFound {
                address: address.to_string(),
                resource_type: resource_type.to_string(),
            }),
        }
    }

    async fn view(&self, request: &ViewRequest) -> Result<Vec<Value>> {
        self.enter().await?;
        let result = self.views.lock().unwrap().get(&request.function).cloned();
        result.ok_or_else(|| SdkError::Node {
            status: 400,
            message: format!("function {} not found", request.function),
        })
    }
}

pub struct FakeWallet {
    pub submitted: Mutex<Vec<(AccountAddress, EntryFunctionPayload)>>,
    reject: Mutex<Option<String>>,
}

impl FakeWallet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            submitted: Mutex::new(Vec::new()),
            reject: Mutex::new(None),
        })
    }

    pub fn reject_with(&self, reason: &str) {
        *self.reject.lock().unwrap() = Some(reason.to_string());
    }

    pub fn submissions(&self) -> Vec<(AccountAddress, EntryFunctionPayload)> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletSigner for FakeWallet {
    async fn sign_and_submit(
        &self,
        sender: &AccountAddress,
        payload: &EntryFunctionPayload,
    ) -> Result<String> {
        if let Some(reason) = self.reject.lock().unwrap().clone() {
            return Err(SdkError::WalletRejected(reason));
        }
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push((sender.clone(), payload.clone()));
        Ok(format!("0x{:064x}", submitted.len()))
    }
}

/// Serves `router` on an ephemeral loopback port and returns its base URL.
pub async fn serve_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// HTTP client that ignores proxy settings from the environment.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn sdk(chain: &Arc<FakeChain>, wallet: &Arc<FakeWallet>) -> TidmatSdk {
    TidmatSdk::new(contracts(), chain.clone(), wallet.clone())
}
