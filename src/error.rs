// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

// endregion: --- Imports

// region:    --- Auction Error
/// 경매 API 에서 발생하는 모든 에러
#[derive(Error, Debug)]
pub enum AuctionError {
    /// 비즈니스 로직 실행 전 입력값 검증 실패
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// 비즈니스 규칙 위반
    #[error("{0}")]
    Forbidden(ForbiddenReason),

    /// 저장소 장애 등 내부 오류 (호출자에게는 상세 내용을 노출하지 않는다)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// 입찰 거절 사유
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForbiddenReason {
    #[error("You cannot bid on your own auctions!")]
    OwnAuction,

    #[error("You are already the highest bidder!")]
    AlreadyHighestBidder,

    #[error("You cannot bid on closed auctions!")]
    AuctionClosed,

    #[error("Your bid must be higher than {highest_bid}!")]
    BidTooLow { highest_bid: f64 },
}

impl ForbiddenReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::OwnAuction => "SELF_BID",
            Self::AlreadyHighestBidder => "ALREADY_HIGHEST_BIDDER",
            Self::AuctionClosed => "AUCTION_CLOSED",
            Self::BidTooLow { .. } => "LOW_BID",
        }
    }
}

impl AuctionError {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound(format!("Auction with ID \"{}\" not found!", id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(reason) => reason.code(),
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<ForbiddenReason> for AuctionError {
    fn from(reason: ForbiddenReason) -> Self {
        Self::Forbidden(reason)
    }
}

impl From<StoreError> for AuctionError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Internal(detail) => {
                error!("{:<12} --> 내부 오류: {}", "Handler", detail);
                serde_json::json!({
                    "error": "Internal server error",
                    "code": self.code(),
                })
            }
            Self::Forbidden(ForbiddenReason::BidTooLow { highest_bid }) => serde_json::json!({
                "error": self.to_string(),
                "code": self.code(),
                "highest_bid": highest_bid,
            }),
            _ => serde_json::json!({
                "error": self.to_string(),
                "code": self.code(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
// endregion: --- Auction Error

// region:    --- Store Error
/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Auction with ID \"{0}\" already exists")]
    AlreadyExists(String),

    /// 저장된 레코드를 도메인 타입으로 변환할 수 없음
    #[error("Corrupt auction record: {0}")]
    Corrupt(String),
}
// endregion: --- Store Error

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_bid_message_mentions_highest_amount() {
        let err = AuctionError::from(ForbiddenReason::BidTooLow { highest_bid: 50.0 });
        assert_eq!(err.to_string(), "Your bid must be higher than 50!");

        let err = AuctionError::from(ForbiddenReason::BidTooLow { highest_bid: 10.5 });
        assert_eq!(err.to_string(), "Your bid must be higher than 10.5!");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.code(), "LOW_BID");
    }

    #[test]
    fn store_errors_become_internal() {
        let err = AuctionError::from(StoreError::AlreadyExists("abc".to_string()));
        assert!(matches!(err, AuctionError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_names_the_id() {
        let err = AuctionError::not_found("missing-id");
        assert_eq!(err.to_string(), "Auction with ID \"missing-id\" not found!");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
// endregion: --- Tests
