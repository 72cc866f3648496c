//! Category Endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    db::{Category, Question},
    error::ApiError,
    types::Envelope,
    AppState,
};

// ============ Response Types ============

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

// ============ Handlers ============

/// GET /categories
///
/// 카테고리가 하나도 없으면 404
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Envelope<CategoriesResponse>>, ApiError> {
    let categories = state.db.list_categories().await?;

    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_string()));
    }

    Ok(Json(Envelope::success(CategoriesResponse { categories })))
}

/// GET /categories/:id/questions
///
/// 해당 카테고리 문제가 없거나 id가 정수가 아니면 404
pub async fn get_category_questions(
    State(state): State<AppState>,
    category_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Envelope<CategoryQuestionsResponse>>, ApiError> {
    let Path(category_id) =
        category_id.map_err(|e| ApiError::NotFound(format!("category id: {e}")))?;

    let questions = state.db.questions_by_category(category_id).await?;

    if questions.is_empty() {
        return Err(ApiError::NotFound(format!("questions in category {category_id}")));
    }

    Ok(Json(Envelope::success(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use crate::db::mock::MemoryRepository;
    use crate::routes::test_support::{app, seeded_repo, send};

    #[tokio::test]
    async fn test_get_categories() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"].as_array().unwrap().len(), 3);
        assert_eq!(body["categories"][0]["id"], 1);
        assert_eq!(body["categories"][0]["type"], "Science");
    }

    #[tokio::test]
    async fn test_get_categories_empty_store() {
        let app = app(Arc::new(MemoryRepository::new()));
        let (status, body) = send(app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_get_questions_by_category() {
        let app = app(Arc::new(seeded_repo()));
        let (status, body) = send(app, Method::GET, "/categories/2/questions", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["totalQuestions"], 3);
        assert_eq!(body["currentCategory"], 2);
        assert!(body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == 2));
    }

    #[tokio::test]
    async fn test_get_questions_by_category_not_found() {
        let app = app(Arc::new(seeded_repo()));

        let (status, body) = send(app.clone(), Method::GET, "/categories/74/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Item not found");

        // 카테고리는 있지만 문제가 없음
        let (status, _) = send(app.clone(), Method::GET, "/categories/3/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(app, Method::GET, "/categories/science/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
