// region:    --- Imports
use crate::auction::commands::{create_auction, CreateAuctionCommand};
use crate::auction::model::AuctionStatus;
use crate::auth::Identity;
use crate::bidding::commands::{place_bid, PlaceBidCommand};
use crate::error::AuctionError;
use crate::query;
use crate::store::AuctionStore;
use crate::validation::ValidatedJson;
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

/// 모든 핸들러가 공유하는 저장소
pub type AppState = Arc<dyn AuctionStore>;

// region:    --- Router

/// 라우터 설정
pub fn routes(store: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auction", post(handle_create_auction))
        .route("/auction/:id", get(handle_get_auction))
        .route("/auction/:id/bid", patch(handle_place_bid))
        .route("/auctions", get(handle_list_auctions))
        .layer(cors)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .with_state(store)
}

// endregion: --- Router

// region:    --- Command Handlers

/// 경매 생성 요청 처리
pub async fn handle_create_auction(
    State(store): State<AppState>,
    Identity(seller): Identity,
    ValidatedJson(cmd): ValidatedJson<CreateAuctionCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 생성 요청 seller: {}", "Handler", seller);
    match create_auction(store.as_ref(), cmd, &seller).await {
        Ok(auction) => (StatusCode::CREATED, Json(auction)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 입찰 요청 처리
pub async fn handle_place_bid(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Identity(bidder): Identity,
    ValidatedJson(cmd): ValidatedJson<PlaceBidCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 입찰 요청 id: {}, bidder: {}", "Handler", id, bidder);
    match place_bid(store.as_ref(), &id, cmd, &bidder).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

#[derive(Debug, Deserialize)]
pub struct ListAuctionsParams {
    pub status: Option<String>,
}

/// 경매 조회
pub async fn handle_get_auction(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    match query::handlers::get_auction_by_id(store.as_ref(), &id).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 상태별 경매 목록 조회 (기본값 OPEN)
pub async fn handle_list_auctions(
    State(store): State<AppState>,
    Query(params): Query<ListAuctionsParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 목록 조회 {:?}", "Handler", params);
    let status = match params.status.as_deref() {
        None => AuctionStatus::Open,
        Some(value) => match value.parse::<AuctionStatus>() {
            Ok(status) => status,
            Err(e) => return AuctionError::Validation(e).into_response(),
        },
    };

    match query::handlers::list_auctions(store.as_ref(), status).await {
        Ok(auctions) => Json(auctions).into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Query Handlers
