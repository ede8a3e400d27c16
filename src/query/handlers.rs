// region:    --- Imports
use crate::auction::model::{Auction, AuctionStatus};
use crate::error::AuctionError;
use crate::store::AuctionStore;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 조회
///
/// 입찰 처리에서도 내부 조회 함수로 사용한다. 부수 효과가 없다.
pub async fn get_auction_by_id(
    store: &dyn AuctionStore,
    id: &str,
) -> Result<Auction, AuctionError> {
    info!("{:<12} --> 경매 조회 id: {}", "Query", id);
    let auction = store.get(id).await.map_err(|e| {
        error!("{:<12} --> 경매 조회 실패 id: {}, {:?}", "Query", id, e);
        AuctionError::from(e)
    })?;

    auction.ok_or_else(|| AuctionError::not_found(id))
}

/// 상태별 경매 목록 조회
pub async fn list_auctions(
    store: &dyn AuctionStore,
    status: AuctionStatus,
) -> Result<Vec<Auction>, AuctionError> {
    info!("{:<12} --> 경매 목록 조회 status: {}", "Query", status);
    store.list_by_status(status).await.map_err(|e| {
        error!("{:<12} --> 경매 목록 조회 실패: {:?}", "Query", e);
        AuctionError::from(e)
    })
}

// endregion: --- Query Handlers

// endregion: --- Tests
