//! Route definitions for the Tidmat API

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::*;

// Campaign routes
pub fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route("/api/campaigns", get(list_featured).post(create_campaign))
        .route("/api/campaigns/:id", get(get_campaign))
        .route("/api/campaigns/status/:creator", get(get_campaign_status))
}

// Contribution routes
pub fn contribution_routes() -> Router<AppState> {
    Router::new()
        .route("/api/contributions", post(submit_contribution))
        .route("/api/contributions/:contributor/:id", get(get_contribution))
}

// Escrow routes
pub fn escrow_routes() -> Router<AppState> {
    Router::new().route("/api/escrows/:creator", get(get_escrow))
}

// Wallet routes
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/api/wallet", get(wallet_status))
        .route("/api/wallet/connect", post(connect))
        .route("/api/wallet/disconnect", post(disconnect))
}

// Storefront routes
pub fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/api/network", get(network))
        .route("/api/dashboard", get(dashboard))
        .route("/api/state", get(contract_state))
}

pub fn app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(campaign_routes())
        .merge(contribution_routes())
        .merge(escrow_routes())
        .merge(wallet_routes())
        .merge(market_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins = origins
        .iter()
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
}
