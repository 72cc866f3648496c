//! Question Endpoints
//!
//! Paginated listing, creation, deletion and substring search of trivia
//! questions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{Category, NewQuestion, Question},
    error::ApiError,
    types::{Envelope, NumberOrString},
    AppState, QUESTIONS_PER_PAGE,
};

// ============ Request/Response Types ============

/// 목록 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// 페이지 (1부터 시작, 정수가 아니면 1로 간주)
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i32,
}

/// 문제 추가 요청
///
/// 모든 필드를 Option으로 받아서 누락 여부에 따라 400/422를 구분
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<NumberOrString>,
    pub difficulty: Option<NumberOrString>,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_question: usize,
    pub current_category: Option<i32>,
}

// ============ Handlers ============

/// GET /questions?page=N
///
/// 페이지당 10개. 빈 페이지는 404
pub async fn get_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Envelope<QuestionsResponse>>, ApiError> {
    let page = query
        .ok()
        .and_then(|Query(q)| q.page)
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);

    let offset = page
        .checked_sub(1)
        .filter(|p| *p >= 0)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .ok_or_else(|| ApiError::NotFound(format!("page {page}")))?;

    let (questions, total_questions) = state.db.page_questions(offset, QUESTIONS_PER_PAGE).await?;

    if questions.is_empty() {
        return Err(ApiError::NotFound(format!("page {page}")));
    }

    let categories = state.db.list_categories().await?;

    Ok(Json(Envelope::success(QuestionsResponse {
        questions,
        total_questions,
        categories,
    })))
}

/// DELETE /questions/:id
///
/// 없는 id, 정수가 아닌 id, 저장소 실패 모두 422
pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Envelope<DeleteResponse>>, ApiError> {
    let Path(question_id) =
        question_id.map_err(|e| ApiError::Unprocessable(format!("question id: {e}")))?;

    let existing = state
        .db
        .find_question(question_id)
        .await
        .map_err(|e| ApiError::Unprocessable(format!("lookup of question {question_id}: {e:#}")))?;

    if existing.is_none() {
        return Err(ApiError::Unprocessable(format!("question {question_id} does not exist")));
    }

    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .map_err(|e| ApiError::Unprocessable(format!("delete of question {question_id}: {e:#}")))?;

    // 조회와 삭제 사이에 다른 요청이 먼저 지웠을 수 있음
    if !deleted {
        return Err(ApiError::Unprocessable(format!("question {question_id} already deleted")));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(Envelope::success(DeleteResponse {
        deleted_id: question_id,
    })))
}

/// POST /questions
///
/// # Validation
///
/// - question/answer 누락 또는 공백 → 400
/// - 본문 파싱 실패, category/difficulty 누락·비정수, 없는 카테고리, 저장 실패 → 422
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<CreateResponse>>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Unprocessable(format!("body: {e}")))?;

    let question = non_blank(req.question)
        .ok_or_else(|| ApiError::BadRequest("question is required".to_string()))?;
    let answer = non_blank(req.answer)
        .ok_or_else(|| ApiError::BadRequest("answer is required".to_string()))?;

    let category = req
        .category
        .as_ref()
        .and_then(NumberOrString::as_i32)
        .ok_or_else(|| ApiError::Unprocessable("category must be an integer".to_string()))?;
    let difficulty = req
        .difficulty
        .as_ref()
        .and_then(NumberOrString::as_i32)
        .ok_or_else(|| ApiError::Unprocessable("difficulty must be an integer".to_string()))?;

    let created = state
        .db
        .insert_question(&NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
        .await
        .map_err(|e| ApiError::Unprocessable(format!("insert: {e:#}")))?;

    tracing::info!(question_id = created.id, category, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(CreateResponse {
            message: "Question added successfully",
        })),
    ))
}

/// POST /questions/search
///
/// question 텍스트에 대한 대소문자 무시 부분 문자열 검색
pub async fn search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Envelope<SearchResponse>>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(format!("body: {e}")))?;

    let term = req
        .search_term
        .ok_or_else(|| ApiError::BadRequest("searchTerm is required".to_string()))?;

    let questions = state.db.search_questions(&term).await?;

    if questions.is_empty() {
        return Err(ApiError::NotFound(format!("questions matching {term:?}")));
    }

    Ok(Json(Envelope::success(SearchResponse {
        total_question: questions.len(),
        questions,
        current_category: None,
    })))
}

// ============ Helpers ============

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
