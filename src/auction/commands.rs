/// 경매 생성 커맨드 처리
// region:    --- Imports
use crate::auction::model::Auction;
use crate::error::AuctionError;
use crate::store::AuctionStore;
use crate::validation::Validate;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Commands
/// 경매 생성 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateAuctionCommand {
    pub title: String,
}

impl Validate for CreateAuctionCommand {
    fn validate(&self) -> Result<(), AuctionError> {
        if self.title.trim().is_empty() {
            return Err(AuctionError::Validation(
                "title must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// 경매 생성
pub async fn create_auction(
    store: &dyn AuctionStore,
    cmd: CreateAuctionCommand,
    seller: &str,
) -> Result<Auction, AuctionError> {
    info!("{:<12} --> 경매 생성 요청 처리 시작: {:?}", "Command", cmd);

    let auction = Auction::open(cmd.title, seller.to_string());

    // ID 충돌도 저장소 장애와 동일하게 내부 오류로 처리
    store.put(&auction).await.map_err(|e| {
        error!("{:<12} --> 경매 저장 실패 id: {}, {:?}", "Command", auction.id, e);
        AuctionError::from(e)
    })?;

    info!("{:<12} --> 경매 생성 완료 id: {}", "Command", auction.id);
    Ok(auction)
}
// endregion: --- Commands

// endregion: --- Tests
