// region:    --- Imports
use crate::error::AuctionError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

// endregion: --- Imports

/// 요청 본문 검증
pub trait Validate {
    fn validate(&self) -> Result<(), AuctionError>;
}

/// 역직렬화와 검증을 모두 통과한 JSON 본문
///
/// 형식 오류(필드 누락, 타입 불일치)와 검증 실패 모두 비즈니스 로직 실행 전에
/// `AuctionError::Validation` 으로 거절된다.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AuctionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AuctionError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
