//! Trivia API Library
//!
//! # Overview
//!
//! 트리비아 퀴즈 웹앱의 백엔드 API를 제공합니다.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Routes  │  │Services │  │   DB    │  │  Types  │    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       │            │            │            │          │
//! │       └────────────┴────────────┴────────────┘          │
//! │                         │                                │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │
//!                           ▼
//!                  ┌────────────────┐
//!                  │   PostgreSQL   │
//!                  └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 응답 봉투
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `services`: 퀴즈 문제 선택
//! - `db`: 저장소 trait 및 PostgreSQL 구현
//! - `types`: 공통 타입 정의
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trivia_api::{create_router, AppState, Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url, config.db_max_connections).await?;
//!     let app = create_router(AppState {
//!         db: Arc::new(db),
//!         config: Arc::new(config),
//!     });
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod db;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::ApiError;
pub use db::{Database, QuestionRepository};

/// 페이지당 문제 수
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// 애플리케이션 전역 상태
///
/// 요청 간 공유되는 가변 상태 없음 (퀴즈 진행 상태는 클라이언트가 매번 전송)
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn QuestionRepository>,
    pub config: Arc<Config>,
}

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET    /health                     - 서버 상태 확인
///
/// GET    /categories                 - 카테고리 목록
/// GET    /categories/:id/questions   - 카테고리별 문제
///
/// GET    /questions?page=N           - 문제 목록 (10개씩)
/// POST   /questions                  - 문제 추가
/// DELETE /questions/:id              - 문제 삭제
/// POST   /questions/search           - 문제 검색
///
/// POST   /quizzes                    - 다음 퀴즈 문제
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))

        // Categories
        .route("/categories", get(routes::categories::get_categories))
        .route("/categories/:id/questions", get(routes::categories::get_category_questions))

        // Questions
        .route(
            "/questions",
            get(routes::questions::get_questions).post(routes::questions::create_question),
        )
        .route("/questions/search", post(routes::questions::search_questions))
        .route("/questions/:id", delete(routes::questions::delete_question))

        // Quiz
        .route("/quizzes", post(routes::quizzes::play_quiz))

        // 매칭 실패도 봉투로 응답
        .fallback(routes::not_found)

        // 미들웨어
        .layer(middleware::map_response(routes::method_not_allowed_envelope))
        .layer(TraceLayer::new_for_http())
        .layer(cors)

        // 상태 주입
        .with_state(state)
}

/// CORS 설정
///
/// - 프로덕션: ALLOWED_ORIGINS에 명시된 도메인만 허용
/// - 개발: 모든 origin 허용
fn cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    let cors = CorsLayer::new().allow_methods(methods).allow_headers(headers);

    if config.is_production() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        cors.allow_origin(origins)
    } else {
        cors.allow_origin(Any)
    }
}
