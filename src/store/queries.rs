/// 경매 저장
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (
        id, title, status, seller, created_at, ending_at,
        highest_bid_amount, highest_bid_bidder
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    ON CONFLICT (id) DO NOTHING
    RETURNING id
"#;

/// 경매 조회
pub const GET_AUCTION: &str = r#"
    SELECT id, title, status, seller, created_at, ending_at, highest_bid_amount, highest_bid_bidder
    FROM auctions
    WHERE id = $1
"#;

/// 최고 입찰 조건부 갱신
pub const UPDATE_HIGHEST_BID: &str = r#"
    UPDATE auctions
    SET highest_bid_amount = $2, highest_bid_bidder = $3
    WHERE id = $1
      AND status = 'OPEN'
      AND highest_bid_amount < $2
      AND highest_bid_bidder IS DISTINCT FROM $3
    RETURNING id, title, status, seller, created_at, ending_at,
        highest_bid_amount, highest_bid_bidder
"#;

/// 상태별 경매 목록
pub const LIST_AUCTIONS_BY_STATUS: &str = r#"
    SELECT id, title, status, seller, created_at, ending_at, highest_bid_amount, highest_bid_bidder
    FROM auctions
    WHERE status = $1
    ORDER BY created_at DESC
"#;
