use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::{ApiResponse, ContractError, Escrow};

#[derive(Debug, Serialize)]
pub struct EscrowView {
    #[serde(flatten)]
    pub escrow: Escrow,
    /// Whether the settlement flags are mutually consistent.
    pub consistent: bool,
    pub settled: bool,
}

pub async fn get_escrow(
    State(state): State<AppState>,
    Path(creator): Path<String>,
) -> (StatusCode, Json<ApiResponse<EscrowView>>) {
    match state.contract.get_escrow(&creator).await {
        Some(escrow) => {
            let consistent = escrow.state.is_consistent();
            let settled = escrow.state.is_settled();
            (
                StatusCode::OK,
                Json(ApiResponse::ok(EscrowView {
                    escrow,
                    consistent,
                    settled,
                })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(ContractError::EscrowNotFound.as_str())),
        ),
    }
}
