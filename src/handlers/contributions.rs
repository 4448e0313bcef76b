use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app_state::AppState;
use crate::models::{ApiResponse, Contribution, ContributionRequest, TransactionResult};
use crate::sdk::hash_contribution_data;

pub async fn submit_contribution(
    State(state): State<AppState>,
    Json(payload): Json<ContributionRequest>,
) -> (StatusCode, Json<ApiResponse<TransactionResult>>) {
    if let Err(e) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(format!("Validation error: {}", e))),
        );
    }

    let data_hash = match (payload.data_hash, payload.data) {
        (Some(hash), _) => hash,
        (None, Some(data)) => hash_contribution_data(data.as_bytes()),
        (None, None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::err("Either data_hash or data is required")),
            )
        }
    };

    match state
        .contract
        .submit_contribution(&payload.campaign_id, &data_hash)
        .await
    {
        Some(result) => super::transaction_response(result),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::err("Wallet not connected")),
        ),
    }
}

pub async fn get_contribution(
    State(state): State<AppState>,
    Path((contributor, id)): Path<(String, String)>,
) -> (StatusCode, Json<ApiResponse<Contribution>>) {
    match state.sdk.get_contribution(&contributor, &id).await {
        Some(contribution) => (StatusCode::OK, Json(ApiResponse::ok(contribution))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err("Contribution not found")),
        ),
    }
}
