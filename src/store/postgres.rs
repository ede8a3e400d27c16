// region:    --- Imports
use super::{queries, AuctionStore, UpdateOutcome};
use crate::auction::model::{Auction, AuctionStatus, HighestBid};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Auction Row
/// auctions 테이블 행
#[derive(Debug, sqlx::FromRow)]
struct AuctionRow {
    id: String,
    title: String,
    status: String,
    seller: String,
    created_at: DateTime<Utc>,
    ending_at: DateTime<Utc>,
    highest_bid_amount: f64,
    highest_bid_bidder: Option<String>,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = StoreError;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<AuctionStatus>()
            .map_err(|e| StoreError::Corrupt(format!("{} (id: {})", e, row.id)))?;

        Ok(Auction {
            id: row.id,
            title: row.title,
            status,
            seller: row.seller,
            created_at: row.created_at,
            ending_at: row.ending_at,
            highest_bid: HighestBid {
                amount: row.highest_bid_amount,
                bidder: row.highest_bid_bidder,
            },
        })
    }
}
// endregion: --- Auction Row

// region:    --- Postgres Auction Store
/// PostgreSQL 경매 저장소
pub struct PostgresAuctionStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn get(&self, id: &str) -> Result<Option<Auction>, StoreError> {
        debug!("{:<12} --> 경매 조회 id: {}", "Store", id);
        sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(self.db_manager.pool())
            .await?
            .map(Auction::try_from)
            .transpose()
    }

    async fn put(&self, auction: &Auction) -> Result<(), StoreError> {
        debug!("{:<12} --> 경매 저장 id: {}", "Store", auction.id);
        sqlx::query_scalar::<_, String>(queries::INSERT_AUCTION)
            .bind(&auction.id)
            .bind(&auction.title)
            .bind(auction.status.as_str())
            .bind(&auction.seller)
            .bind(auction.created_at)
            .bind(auction.ending_at)
            .bind(auction.highest_bid.amount)
            .bind(&auction.highest_bid.bidder)
            .fetch_optional(self.db_manager.pool())
            .await?
            .ok_or_else(|| StoreError::AlreadyExists(auction.id.clone()))?;

        Ok(())
    }

    async fn update_highest_bid(
        &self,
        id: &str,
        amount: f64,
        bidder: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let id = id.to_string();
        let bidder = bidder.to_string();

        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    update_highest_bid_in_tx(&mut **tx, &id, amount, &bidder).await
                })
            })
            .await
    }

    async fn list_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, StoreError> {
        debug!("{:<12} --> 상태별 경매 목록 조회: {}", "Store", status);
        sqlx::query_as::<_, AuctionRow>(queries::LIST_AUCTIONS_BY_STATUS)
            .bind(status.as_str())
            .fetch_all(self.db_manager.pool())
            .await?
            .into_iter()
            .map(Auction::try_from)
            .collect()
    }
}

/// 트랜잭션 안에서 최고 입찰 조건부 갱신
async fn update_highest_bid_in_tx(
    conn: &mut PgConnection,
    id: &str,
    amount: f64,
    bidder: &str,
) -> Result<UpdateOutcome, StoreError> {
    let updated = sqlx::query_as::<_, AuctionRow>(queries::UPDATE_HIGHEST_BID)
        .bind(id)
        .bind(amount)
        .bind(bidder)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(row) = updated {
        return Ok(UpdateOutcome::Updated(row.try_into()?));
    }

    // 조건 불일치인지 레코드가 사라졌는지 구분
    let current = sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match current {
        Some(row) => {
            info!("{:<12} --> 최고 입찰 갱신 조건 불일치 id: {}", "Store", id);
            Ok(UpdateOutcome::Rejected(row.try_into()?))
        }
        None => Ok(UpdateOutcome::Missing),
    }
}
// endregion: --- Postgres Auction Store

// endregion: --- Tests
