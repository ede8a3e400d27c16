// region:    --- Imports
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

// endregion: --- Imports

/// 상위 인증 계층이 검증한 사용자 식별자를 담는 헤더
pub const IDENTITY_HEADER: &str = "x-authenticated-user";

/// 인증된 호출자 식별자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Identity(value.to_string()))
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "error": "Missing authenticated user",
                        "code": "UNAUTHORIZED"
                    })),
                )
            })
    }
}
