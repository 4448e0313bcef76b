use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use validator::Validate;

use crate::app_state::AppState;
use crate::catalog::{self, FeaturedCampaign};
use crate::models::{ApiResponse, Campaign, CampaignParams, ContractError, TransactionResult};

#[derive(Debug, Serialize)]
pub struct CampaignView {
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Deadline has passed; the contract no longer accepts contributions.
    pub expired: bool,
}

pub async fn list_featured() -> Json<ApiResponse<Vec<FeaturedCampaign>>> {
    Json(ApiResponse::ok(catalog::featured_campaigns()))
}

pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ApiResponse<CampaignView>>) {
    match state.contract.get_campaign(&id).await {
        Some(campaign) => {
            let expired = campaign.is_expired(Utc::now());
            (
                StatusCode::OK,
                Json(ApiResponse::ok(CampaignView { campaign, expired })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(ContractError::CampaignNotFound.as_str())),
        ),
    }
}

pub async fn get_campaign_status(
    State(state): State<AppState>,
    Path(creator): Path<String>,
) -> (StatusCode, Json<ApiResponse<u8>>) {
    match state.sdk.get_campaign_status(&creator).await {
        Some(status) => (StatusCode::OK, Json(ApiResponse::ok(status))),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(ContractError::CampaignNotFound.as_str())),
        ),
    }
}

pub async fn create_campaign(
    State(state): State<AppState>,
    Json(params): Json<CampaignParams>,
) -> (StatusCode, Json<ApiResponse<TransactionResult>>) {
    if let Err(e) = params.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err(format!("Validation error: {}", e))),
        );
    }

    let Some(sender) = state.wallet.account().await else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::err("Wallet not connected")),
        );
    };

    let result = state.sdk.create_campaign(&sender, &params).await;
    super::transaction_response(result)
}
