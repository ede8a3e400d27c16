use super::{accepts_bid, AuctionStore, UpdateOutcome};
use crate::auction::model::{Auction, AuctionStatus};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// 메모리 기반 경매 저장소
///
/// PostgreSQL 저장소와 같은 조건부 업데이트 규칙을 따른다.
#[derive(Default)]
pub struct MemoryAuctionStore {
    auctions: RwLock<HashMap<String, Auction>>,
}

impl MemoryAuctionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 외부 프로세스(경매 종료, 삭제)를 흉내내는 테스트 전용 기능
#[cfg(any(test, feature = "test-util"))]
impl MemoryAuctionStore {
    /// 외부 프로세스의 경매 종료를 흉내낸다
    pub async fn close(&self, id: &str) -> bool {
        match self.auctions.write().await.get_mut(id) {
            Some(auction) => {
                auction.status = AuctionStatus::Closed;
                true
            }
            None => false,
        }
    }

    /// 외부 프로세스의 레코드 삭제를 흉내낸다
    pub async fn remove(&self, id: &str) -> Option<Auction> {
        self.auctions.write().await.remove(id)
    }
}

#[async_trait]
impl AuctionStore for MemoryAuctionStore {
    async fn get(&self, id: &str) -> Result<Option<Auction>, StoreError> {
        Ok(self.auctions.read().await.get(id).cloned())
    }

    async fn put(&self, auction: &Auction) -> Result<(), StoreError> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(StoreError::AlreadyExists(auction.id.clone()));
        }
        auctions.insert(auction.id.clone(), auction.clone());
        Ok(())
    }

    async fn update_highest_bid(
        &self,
        id: &str,
        amount: f64,
        bidder: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut auctions = self.auctions.write().await;
        let Some(auction) = auctions.get_mut(id) else {
            return Ok(UpdateOutcome::Missing);
        };

        if !accepts_bid(auction, amount, bidder) {
            return Ok(UpdateOutcome::Rejected(auction.clone()));
        }

        auction.highest_bid.amount = amount;
        auction.highest_bid.bidder = Some(bidder.to_string());
        Ok(UpdateOutcome::Updated(auction.clone()))
    }

    async fn list_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, StoreError> {
        let mut auctions: Vec<Auction> = self
            .auctions
            .read()
            .await
            .values()
            .filter(|auction| auction.status == status)
            .cloned()
            .collect();
        auctions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(auctions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn auction(seller: &str) -> Auction {
        Auction::open("Test Item".to_string(), seller.to_string())
    }

    #[tokio::test]
    async fn put_rejects_duplicate_ids() {
        let store = MemoryAuctionStore::new();
        let auction = auction("seller");

        store.put(&auction).await.unwrap();
        let result = store.put(&auction).await;

        assert!(matches!(result, Err(StoreError::AlreadyExists(id)) if id == auction.id));
    }

    #[tokio::test]
    async fn update_applies_only_higher_bids() {
        let store = MemoryAuctionStore::new();
        let auction = auction("seller");
        store.put(&auction).await.unwrap();

        let outcome = store
            .update_highest_bid(&auction.id, 100.0, "alice")
            .await
            .unwrap();
        let updated = match outcome {
            UpdateOutcome::Updated(auction) => auction,
            other => panic!("expected update, got {:?}", other),
        };
        assert_eq!(updated.highest_bid.amount, 100.0);
        assert_eq!(updated.highest_bid.bidder.as_deref(), Some("alice"));

        // 낮은 입찰은 현재 레코드와 함께 거절
        let outcome = store
            .update_highest_bid(&auction.id, 80.0, "bob")
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Rejected(updated.clone()));

        // 현재 최고 입찰자의 재입찰도 거절
        let outcome = store
            .update_highest_bid(&auction.id, 200.0, "alice")
            .await
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::Rejected(_)));
    }

    #[tokio::test]
    async fn update_on_closed_or_missing_auction() {
        let store = MemoryAuctionStore::new();
        let auction = auction("seller");
        store.put(&auction).await.unwrap();
        assert!(store.close(&auction.id).await);

        let outcome = store
            .update_highest_bid(&auction.id, 10.0, "alice")
            .await
            .unwrap();
        assert!(
            matches!(outcome, UpdateOutcome::Rejected(a) if a.status == AuctionStatus::Closed)
        );

        let outcome = store
            .update_highest_bid("nope", 10.0, "alice")
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Missing);
    }

    #[tokio::test]
    async fn list_filters_by_status_newest_first() {
        let store = MemoryAuctionStore::new();
        let now = Utc::now();
        let older = Auction::open_at(
            "old".to_string(),
            "s".to_string(),
            now - Duration::minutes(5),
        );
        let newer = Auction::open_at("new".to_string(), "s".to_string(), now);
        let closed = auction("s");
        for a in [&older, &newer, &closed] {
            store.put(a).await.unwrap();
        }
        store.close(&closed.id).await;

        let open = store.list_by_status(AuctionStatus::Open).await.unwrap();
        let titles: Vec<&str> = open.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);

        let closed_list = store.list_by_status(AuctionStatus::Closed).await.unwrap();
        assert_eq!(closed_list.len(), 1);
        assert_eq!(closed_list[0].id, closed.id);
    }
}
