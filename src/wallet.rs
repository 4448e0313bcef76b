//! Wallet connection lifecycle.
//!
//! One session per process: this is a single-user local stand-in for a browser
//! wallet extension. Whoever reaches `/api/wallet/connect` chooses the sender
//! that the relay is asked to sign for, so the server binds to loopback only.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::AccountAddress;

/// Connected account as seen by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletStatus {
    pub connected: bool,
    pub address: Option<AccountAddress>,
    /// Shortened address for display, or the connect prompt.
    pub label: String,
}

#[derive(Clone, Default)]
pub struct WalletSession {
    account: Arc<RwLock<Option<AccountAddress>>>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn on_connect_success(&self, address: AccountAddress) {
        tracing::info!(%address, "wallet connected");
        *self.account.write().await = Some(address);
    }

    pub async fn on_disconnect_success(&self) {
        if let Some(address) = self.account.write().await.take() {
            tracing::info!(%address, "wallet disconnected");
        }
    }

    pub async fn account(&self) -> Option<AccountAddress> {
        self.account.read().await.clone()
    }

    pub async fn status(&self) -> WalletStatus {
        let address = self.account().await;
        let label = address
            .as_ref()
            .map(AccountAddress::short)
            .unwrap_or_else(|| "Connect Wallet".to_string());
        WalletStatus {
            connected: address.is_some(),
            address,
            label,
        }
    }
}
