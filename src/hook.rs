//! Request-state adapter around [`TidmatSdk`].
//!
//! Tracks `loading`, the last classified error and the last results. Each call
//! takes a request token; only the latest token may commit, so overlapping
//! calls settle to the newest one no matter which finishes first.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::models::{Campaign, ContractError, Escrow, TransactionResult};
use crate::sdk::TidmatSdk;
use crate::wallet::WalletSession;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractSnapshot {
    pub loading: bool,
    pub error: Option<ContractError>,
    pub campaign: Option<Campaign>,
    pub escrow: Option<Escrow>,
    pub last_transaction: Option<TransactionResult>,
    /// Token of the most recently started request.
    pub request: u64,
}

#[derive(Clone)]
pub struct ContractHook {
    sdk: Arc<TidmatSdk>,
    wallet: WalletSession,
    state: Arc<Mutex<ContractSnapshot>>,
}

/// Outstanding request. Clears `loading` on drop if it is still the latest
/// and was never settled, so a cancelled call cannot leave `loading` stuck.
struct Ticket {
    state: Arc<Mutex<ContractSnapshot>>,
    token: u64,
    settled: bool,
}

impl Ticket {
    fn settle(mut self, commit: impl FnOnce(&mut ContractSnapshot)) {
        self.settled = true;
        let mut state = lock(&self.state);
        if state.request != self.token {
            tracing::debug!(
                token = self.token,
                latest = state.request,
                "discarding superseded result"
            );
            return;
        }
        commit(&mut *state);
        state.loading = false;
    }
}

impl Drop for Ticket {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = lock(&self.state);
        if state.request == self.token {
            state.loading = false;
        }
    }
}

fn lock(state: &Mutex<ContractSnapshot>) -> MutexGuard<'_, ContractSnapshot> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ContractHook {
    pub fn new(sdk: Arc<TidmatSdk>, wallet: WalletSession) -> Self {
        Self {
            sdk,
            wallet,
            state: Arc::new(Mutex::new(ContractSnapshot::default())),
        }
    }

    pub fn snapshot(&self) -> ContractSnapshot {
        lock(&self.state).clone()
    }

    pub fn loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn error(&self) -> Option<ContractError> {
        lock(&self.state).error
    }

    fn begin(&self) -> Ticket {
        let mut state = lock(&self.state);
        state.request += 1;
        state.loading = true;
        state.error = None;
        Ticket {
            state: self.state.clone(),
            token: state.request,
            settled: false,
        }
    }

    pub async fn get_campaign(&self, campaign_id: &str) -> Option<Campaign> {
        let ticket = self.begin();
        let campaign = self.sdk.get_campaign_details(campaign_id).await;
        let committed = campaign.clone();
        ticket.settle(move |state| match committed {
            Some(campaign) => state.campaign = Some(campaign),
            None => {
                state.campaign = None;
                state.error = Some(ContractError::CampaignNotFound);
            }
        });
        campaign
    }

    pub async fn get_escrow(&self, creator: &str) -> Option<Escrow> {
        let ticket = self.begin();
        let escrow = self.sdk.get_escrow_state(creator).await;
        let committed = escrow.clone();
        ticket.settle(move |state| match committed {
            Some(escrow) => state.escrow = Some(escrow),
            None => {
                state.escrow = None;
                state.error = Some(ContractError::EscrowNotFound);
            }
        });
        escrow
    }

    /// Returns `None` without touching any state when no wallet is connected.
    pub async fn submit_contribution(
        &self,
        campaign_id: &str,
        data_hash: &str,
    ) -> Option<TransactionResult> {
        let sender = self.wallet.account().await?;

        let ticket = self.begin();
        let result = self
            .sdk
            .submit_contribution(&sender, campaign_id, data_hash)
            .await;
        let committed = result.clone();
        ticket.settle(move |state| match committed.contract_error() {
            None => state.last_transaction = Some(committed),
            Some(kind) => state.error = Some(kind),
        });
        Some(result)
    }
}
