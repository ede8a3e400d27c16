use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 경매 진행 시간 (생성 시점부터 1시간)
pub const BIDDING_WINDOW_HOURS: i64 = 1;

// 경매 상태
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuctionStatus {
    Open,
    Closed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            other => Err(format!("unknown auction status: {}", other)),
        }
    }
}

// 최고 입찰 정보
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct HighestBid {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder: Option<String>,
}

// 경매 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: String,
    pub title: String,
    pub status: AuctionStatus,
    pub seller: String,
    pub created_at: DateTime<Utc>,
    pub ending_at: DateTime<Utc>,
    pub highest_bid: HighestBid,
}

impl Auction {
    /// 새 경매 생성 (OPEN 상태, 입찰가 0, 1시간 입찰 기간)
    pub fn open(title: String, seller: String) -> Self {
        Self::open_at(title, seller, Utc::now())
    }

    /// 지정한 시각 기준으로 새 경매 생성
    pub fn open_at(title: String, seller: String, now: DateTime<Utc>) -> Self {
        // Postgres timestamptz 는 마이크로초 정밀도
        let created_at = now.trunc_subsecs(6);
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            status: AuctionStatus::Open,
            seller,
            created_at,
            ending_at: created_at + Duration::hours(BIDDING_WINDOW_HOURS),
            highest_bid: HighestBid::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == AuctionStatus::Open
    }

    pub fn is_highest_bidder(&self, identity: &str) -> bool {
        self.highest_bid.bidder.as_deref() == Some(identity)
    }
}
