//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `/categories/*` - 카테고리 목록, 카테고리별 문제
//! - `/questions/*` - 문제 목록/추가/삭제/검색
//! - `/quizzes` - 다음 퀴즈 문제

pub mod health;
pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// 매칭되는 경로가 없을 때 (404 봉투)
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {uri}"))
}

/// 라우터가 만든 빈 405 응답을 봉투로 교체
///
/// `Allow` 헤더는 유지
pub async fn method_not_allowed_envelope(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut envelope = ApiError::MethodNotAllowed(format!("allowed: {allow:?}")).into_response();
    if let Some(allow) = allow {
        envelope.headers_mut().insert(header::ALLOW, allow);
    }
    envelope
}
