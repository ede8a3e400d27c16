/// 경매 레코드 저장소
/// 1. PostgreSQL 저장소 (운영)
/// 2. 메모리 저장소 (테스트)
// region:    --- Imports
use crate::auction::model::{Auction, AuctionStatus};
use crate::error::StoreError;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Modules
pub mod memory;
pub mod postgres;
mod queries;

pub use memory::MemoryAuctionStore;
pub use postgres::PostgresAuctionStore;

// endregion: --- Modules

// region:    --- Auction Store Trait
/// 조건부 업데이트 결과
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// 업데이트 성공, 갱신된 레코드
    Updated(Auction),
    /// 대상 레코드가 존재하지 않음
    Missing,
    /// 조건 불일치 (조회 이후 다른 입찰이 반영됨), 현재 레코드
    Rejected(Auction),
}

/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 경매 조회 (부수 효과 없음)
    async fn get(&self, id: &str) -> Result<Option<Auction>, StoreError>;

    /// 경매 저장, 같은 ID 가 이미 있으면 `StoreError::AlreadyExists`
    async fn put(&self, auction: &Auction) -> Result<(), StoreError>;

    /// 최고 입찰 갱신
    ///
    /// 레코드가 OPEN 이고, 현재 최고가가 `amount` 보다 낮고, 현재 최고 입찰자가
    /// `bidder` 가 아닐 때만 원자적으로 반영된다.
    async fn update_highest_bid(
        &self,
        id: &str,
        amount: f64,
        bidder: &str,
    ) -> Result<UpdateOutcome, StoreError>;

    /// 상태별 경매 목록 (생성 시각 내림차순)
    async fn list_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, StoreError>;
}
// endregion: --- Auction Store Trait

/// 조건부 업데이트의 전제 조건
pub(crate) fn accepts_bid(auction: &Auction, amount: f64, bidder: &str) -> bool {
    auction.is_open()
        && auction.highest_bid.amount < amount
        && !auction.is_highest_bidder(bidder)
}
