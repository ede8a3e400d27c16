use crate::auction::model::{Auction, AuctionStatus};
use crate::error::StoreError;
use crate::store::{AuctionStore, UpdateOutcome};
use async_trait::async_trait;

/// 모든 호출이 실패하는 저장소 (저장소 장애 재현용)
pub struct FailingStore;

#[async_trait]
impl AuctionStore for FailingStore {
    async fn get(&self, _id: &str) -> Result<Option<Auction>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn put(&self, _auction: &Auction) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update_highest_bid(
        &self,
        _id: &str,
        _amount: f64,
        _bidder: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_by_status(&self, _status: AuctionStatus) -> Result<Vec<Auction>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
