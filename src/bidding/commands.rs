/// 입찰 커맨드 처리
// region:    --- Imports
use crate::auction::model::Auction;
use crate::error::{AuctionError, ForbiddenReason};
use crate::query::handlers::get_auction_by_id;
use crate::store::{AuctionStore, UpdateOutcome};
use crate::validation::Validate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub amount: f64,
}

impl Validate for PlaceBidCommand {
    fn validate(&self) -> Result<(), AuctionError> {
        // NaN 도 함께 거절
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(AuctionError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// 입찰 규칙 검증
///
/// 검증 순서가 곧 사용자에게 보이는 거절 사유의 우선순위다.
/// 1. 판매자 본인 입찰
/// 2. 이미 최고 입찰자
/// 3. 종료된 경매
/// 4. 현재 최고가 이하 입찰
pub fn check_bid(auction: &Auction, amount: f64, bidder: &str) -> Result<(), ForbiddenReason> {
    if auction.seller == bidder {
        return Err(ForbiddenReason::OwnAuction);
    }

    if auction.is_highest_bidder(bidder) {
        return Err(ForbiddenReason::AlreadyHighestBidder);
    }

    if !auction.is_open() {
        return Err(ForbiddenReason::AuctionClosed);
    }

    if amount <= auction.highest_bid.amount {
        return Err(ForbiddenReason::BidTooLow {
            highest_bid: auction.highest_bid.amount,
        });
    }

    Ok(())
}

/// 입찰
pub async fn place_bid(
    store: &dyn AuctionStore,
    id: &str,
    cmd: PlaceBidCommand,
    bidder: &str,
) -> Result<Auction, AuctionError> {
    info!(
        "{:<12} --> 입찰 요청 처리 시작 id: {}, bidder: {}, {:?}",
        "Command", id, bidder, cmd
    );

    let auction = get_auction_by_id(store, id).await?;

    if let Err(reason) = check_bid(&auction, cmd.amount, bidder) {
        warn!("{:<12} --> 입찰 거절 id: {}, {}", "Command", id, reason);
        return Err(reason.into());
    }

    let outcome = store
        .update_highest_bid(id, cmd.amount, bidder)
        .await
        .map_err(|e| {
            error!("{:<12} --> 최고 입찰 갱신 실패 id: {}, {:?}", "Command", id, e);
            AuctionError::from(e)
        })?;

    match outcome {
        UpdateOutcome::Updated(updated) => {
            info!(
                "{:<12} --> 입찰 성공 id: {}, 현재 가격 {}",
                "Command", id, updated.highest_bid.amount
            );
            Ok(updated)
        }
        UpdateOutcome::Missing => {
            warn!("{:<12} --> 입찰 중 경매가 삭제됨 id: {}", "Command", id);
            Err(AuctionError::not_found(id))
        }
        // 조회 이후 다른 입찰이 먼저 반영된 경우 현재 레코드 기준으로 사유를 다시 판단
        UpdateOutcome::Rejected(current) => {
            let reason = check_bid(&current, cmd.amount, bidder)
                .err()
                .unwrap_or(ForbiddenReason::BidTooLow {
                    highest_bid: current.highest_bid.amount,
                });
            warn!("{:<12} --> 동시 입찰로 거절 id: {}, {}", "Command", id, reason);
            Err(reason.into())
        }
    }
}
// endregion: --- Commands

// endregion: --- Tests
