use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::models::{AccountAddress, ApiResponse};
use crate::wallet::{WalletSession, WalletStatus};

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub address: String,
}

pub async fn wallet_status(State(wallet): State<WalletSession>) -> Json<ApiResponse<WalletStatus>> {
    Json(ApiResponse::ok(wallet.status().await))
}

/// Connect event from the local wallet extension. Replaces the process-wide
/// sender; there is no per-client session.
pub async fn connect(
    State(wallet): State<WalletSession>,
    Json(payload): Json<ConnectRequest>,
) -> (StatusCode, Json<ApiResponse<WalletStatus>>) {
    let address: AccountAddress = match payload.address.parse() {
        Ok(address) => address,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string()))),
    };

    wallet.on_connect_success(address).await;
    (StatusCode::OK, Json(ApiResponse::ok(wallet.status().await)))
}

pub async fn disconnect(State(wallet): State<WalletSession>) -> Json<ApiResponse<WalletStatus>> {
    wallet.on_disconnect_success().await;
    Json(ApiResponse::ok(wallet.status().await))
}
