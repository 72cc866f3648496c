//! Error Handling Module
//!
//! Provides the four-kind error taxonomy of the trivia API (plus the
//! router-level 405) and its mapping to the fixed JSON error envelope. Uses thiserror for the error type and
//! integrates with tracing for structured logging.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API 에러 타입
///
/// # Design Decision
///
/// 각 variant는 하나의 HTTP 상태 코드와 고정 메시지에 매핑됨
/// - 내부 상세(String)는 로그에만 남기고 클라이언트에는 노출하지 않음
/// - 클라이언트는 항상 `{success, error, message}` 봉투만 받음
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Bad request: {0}")]
    BadRequest(String),

    // ============ 404 Not Found ============
    #[error("Not found: {0}")]
    NotFound(String),

    // ============ 405 Method Not Allowed ============
    /// 경로는 있지만 메서드가 맞지 않음 (라우터 단에서만 발생)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    // ============ 422 Unprocessable Entity ============
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    // ============ 500 Internal Server Error ============
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 노출되는 고정 메시지
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad request",
            ApiError::NotFound(_) => "Item not found",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::Unprocessable(_) => "Unprocessable request",
            ApiError::Internal(_) => "Server error",
        }
    }
}

/// 에러 봉투
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            ApiError::Unprocessable(detail) => tracing::warn!("Unprocessable: {}", detail),
            ApiError::BadRequest(detail)
            | ApiError::NotFound(detail)
            | ApiError::MethodNotAllowed(detail) => {
                tracing::debug!("{}: {}", status, detail)
            }
        }

        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// anyhow 에러를 ApiError로 변환
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn envelope(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_envelope_shape() {
        let (status, body) = envelope(ApiError::NotFound("question 7".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_detail_is_not_exposed() {
        let (status, body) = envelope(ApiError::Internal("connection refused".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
        assert!(!body.to_string().contains("connection refused"));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::BadRequest(String::new()).public_message(), "Bad request");
        assert_eq!(
            ApiError::Unprocessable(String::new()).public_message(),
            "Unprocessable request"
        );
        assert_eq!(
            ApiError::Unprocessable(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::MethodNotAllowed(String::new()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_anyhow_maps_to_internal() {
        let err: ApiError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
