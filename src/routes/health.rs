//! Health Check Endpoint
//!
//! # Interview Q&A
//!
//! Q: Health check 엔드포인트는 왜 필요한가?
//! A: 로드밸런서 헬스체크, 컨테이너 liveness/readiness probe
//!
//! Q: DB 연결 상태도 체크하는 이유는?
//! A: "깊은 헬스체크"(deep health check) 패턴
//!    - 단순 200 OK: 프로세스 살아있음
//!    - DB 체크: 실제 서비스 가능 상태

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Health check 응답
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    /// 문제 풀 현황 (DB 연결 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trivia: Option<TriviaStats>,
    pub timestamp: String,
}

/// 퀴즈를 진행할 수 있는 상태인지 판단하는 용도
#[derive(Serialize)]
pub struct TriviaStats {
    pub categories: usize,
    pub questions: i64,
}

#[derive(Serialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// GET /health
///
/// 서버 및 DB 상태 확인 (실패해도 200, status만 degraded)
///
/// 카테고리나 문제가 하나도 없으면 퀴즈를 진행할 수 없으므로 `empty`
pub async fn health_check(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    let db_start = std::time::Instant::now();
    let db_status = match state.db.health_check().await {
        Ok(_) => DatabaseStatus {
            connected: true,
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!("Database health check failed: {:#}", e);
            DatabaseStatus {
                connected: false,
                latency_ms: None,
            }
        }
    };

    let trivia = if db_status.connected {
        trivia_stats(&state).await
    } else {
        None
    };

    let status = match (&trivia, db_status.connected) {
        (_, false) => "degraded",
        (Some(stats), true) if stats.categories == 0 || stats.questions == 0 => "empty",
        _ => "healthy",
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        trivia,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn trivia_stats(state: &AppState) -> Option<TriviaStats> {
    let categories = state.db.list_categories().await;
    let questions = state.db.count_questions().await;

    match (categories, questions) {
        (Ok(categories), Ok(questions)) => Some(TriviaStats {
            categories: categories.len(),
            questions,
        }),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Failed to collect trivia stats: {:#}", e);
            None
        }
    }
}
