//! API handlers for the Tidmat server

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app_state::AppState;
use crate::catalog::{self, Dashboard};
use crate::config::NetworkName;
use crate::hook::ContractSnapshot;
use crate::models::{
    AccountAddress, ApiResponse, ContractError, TransactionError, TransactionResult,
};

pub mod campaigns;
pub mod contributions;
pub mod escrow;
pub mod wallet;

pub use campaigns::{create_campaign, get_campaign, get_campaign_status, list_featured};
pub use contributions::{get_contribution, submit_contribution};
pub use escrow::get_escrow;
pub use wallet::{connect, disconnect, wallet_status};

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub network: NetworkName,
    pub name: &'static str,
    pub chain_id: &'static str,
    pub node_url: String,
    pub module_address: AccountAddress,
}

pub async fn root() -> &'static str {
    "Tidmat API Server"
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn network(State(state): State<AppState>) -> Json<ApiResponse<NetworkResponse>> {
    let info = state.config.network_info();
    Json(ApiResponse::ok(NetworkResponse {
        network: info.network,
        name: info.name,
        chain_id: info.chain_id,
        node_url: state.config.node_url.clone(),
        module_address: state.config.contracts.module_address.clone(),
    }))
}

pub async fn dashboard(State(state): State<AppState>) -> Json<ApiResponse<Dashboard>> {
    let wallet = state.wallet.status().await;
    Json(ApiResponse::ok(catalog::dashboard(&wallet)))
}

pub async fn contract_state(State(state): State<AppState>) -> Json<ApiResponse<ContractSnapshot>> {
    Json(ApiResponse::ok(state.contract.snapshot()))
}

/// Successful submissions are 200, local rejections 400, signing failures 502.
fn transaction_response(
    result: TransactionResult,
) -> (StatusCode, Json<ApiResponse<TransactionResult>>) {
    let (status, error) = match (&result.error, result.contract_error()) {
        (_, None) => (StatusCode::OK, None),
        (Some(TransactionError::Message(message)), _) => {
            (StatusCode::BAD_REQUEST, Some(message.clone()))
        }
        (_, Some(ContractError::InvalidContribution)) => (
            StatusCode::BAD_REQUEST,
            Some(ContractError::InvalidContribution.to_string()),
        ),
        (_, Some(kind)) => (StatusCode::BAD_GATEWAY, Some(kind.to_string())),
    };

    (
        status,
        Json(ApiResponse {
            success: result.success,
            data: Some(result),
            error,
        }),
    )
}
