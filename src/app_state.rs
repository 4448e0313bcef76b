//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::AppConfig;
use crate::hook::ContractHook;
use crate::sdk::TidmatSdk;
use crate::wallet::WalletSession;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sdk: Arc<TidmatSdk>,
    pub contract: ContractHook,
    pub wallet: WalletSession,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, sdk: Arc<TidmatSdk>) -> Self {
        let wallet = WalletSession::new();
        let contract = ContractHook::new(sdk.clone(), wallet.clone());
        Self {
            config,
            sdk,
            contract,
            wallet,
        }
    }
}

impl FromRef<AppState> for WalletSession {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.wallet.clone()
    }
}
