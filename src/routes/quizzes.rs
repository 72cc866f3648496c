//! Quiz Endpoint
//!
//! # Interview Q&A
//!
//! Q: 퀴즈 진행 상태(이미 낸 문제)는 어디에 저장하는가?
//! A: 서버에 저장하지 않음
//!    - 클라이언트가 매 요청마다 `previous_questions`를 보냄
//!    - 서버는 무상태 → 요청 간 공유 가변 상태 없음, 락 불필요
//!
//! Q: 더 낼 문제가 없으면?
//! A: 선택기는 `None`(소진)을 반환하고, 핸들러는 이를 500 봉투로 변환
//!    - 무한 루프 없이 즉시 응답

use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::Question,
    error::ApiError,
    services::{select_next_question, ANY_CATEGORY},
    types::{Envelope, NumberOrString},
    AppState,
};

// ============ Request/Response Types ============

/// 다음 문제 요청
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// 이번 퀴즈에서 이미 낸 문제 id
    pub previous_questions: Vec<NumberOrString>,
    pub quiz_category: QuizCategory,
}

/// 선택된 카테고리 (id 0 = 전체)
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: NumberOrString,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

// ============ Handlers ============

/// POST /quizzes
///
/// # Flow
///
/// 1. 요청 검증 (실패 시 500)
/// 2. 카테고리 범위의 후보 문제 조회
/// 3. 이미 낸 문제를 제외하고 무작위 선택
/// 4. 소진이면 500
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<Envelope<QuizResponse>>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Internal(format!("quiz body: {e}")))?;

    let category_id = req
        .quiz_category
        .id
        .as_i32()
        .ok_or_else(|| ApiError::Internal("quiz_category.id must be an integer".to_string()))?;

    let excluded = req
        .previous_questions
        .iter()
        .map(NumberOrString::as_i32)
        .collect::<Option<HashSet<i32>>>()
        .ok_or_else(|| ApiError::Internal("previous_questions must be integers".to_string()))?;

    let candidates = if category_id == ANY_CATEGORY {
        state.db.list_questions().await?
    } else {
        state.db.questions_by_category(category_id).await?
    };

    // thread_rng는 Send가 아니므로 await 이후에만 생성
    let next = select_next_question(&candidates, &excluded, &mut rand::thread_rng()).cloned();

    match next {
        Some(question) => {
            tracing::debug!(
                question_id = question.id,
                category_id,
                served = excluded.len(),
                "Next quiz question selected"
            );
            Ok(Json(Envelope::success(QuizResponse { question })))
        }
        None => {
            tracing::info!(category_id, served = excluded.len(), "Quiz pool exhausted");
            Err(ApiError::Internal(format!(
                "no unserved questions left in category {category_id}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{app, seeded_repo, send, send_raw, send_with_content_type};

    #[tokio::test]
    async fn test_play_quiz() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": [],
                "quiz_category": { "id": 1, "type": "Science" }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["category"], 1);
    }

    #[tokio::test]
    async fn test_play_quiz_stays_in_category() {
        let app = app(Arc::new(seeded_repo()));

        for _ in 0..20 {
            let (status, body) = send(
                app.clone(),
                Method::POST,
                "/quizzes",
                Some(json!({
                    "previous_questions": [13],
                    "quiz_category": { "id": "2", "type": "Art" }
                })),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["question"]["category"], 2);
            assert_ne!(body["question"]["id"], 13);
        }
    }

    #[tokio::test]
    async fn test_play_quiz_any_category() {
        let app = app(Arc::new(seeded_repo()));
        // 카테고리 1 문제(1..=12)를 전부 제외하면 전체 풀에서만 나올 수 있는 문제가 선택됨
        let science: Vec<i32> = (1..=12).collect();

        let (status, body) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": science,
                "quiz_category": { "id": 0, "type": "click" }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["category"], 2);
    }

    #[tokio::test]
    async fn test_play_quiz_exhausted() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": [13, 14, 15],
                "quiz_category": { "id": 2 }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Server error");
    }

    #[tokio::test]
    async fn test_play_quiz_every_question_served() {
        let app = app(Arc::new(seeded_repo()));
        let everything: Vec<i32> = (1..=15).collect();

        let (status, _) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": everything,
                "quiz_category": { "id": 0 }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_play_quiz() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": [],
                "quizz_category": { "ids": 1, "types": "Science" }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Server error");
    }

    #[tokio::test]
    async fn test_play_quiz_with_malformed_body() {
        let app = app(Arc::new(seeded_repo()));

        let (status, body) = send_raw(app.clone(), Method::POST, "/quizzes", "[1, 2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Server error");

        let request = json!({ "previous_questions": [], "quiz_category": { "id": 1 } }).to_string();
        let (status, body) = send_with_content_type(app, Method::POST, "/quizzes", None, &request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
    }

    #[tokio::test]
    async fn test_play_quiz_with_non_numeric_ids() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(
            app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": ["first"],
                "quiz_category": { "id": 1 }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
