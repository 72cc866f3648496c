//! Repository Pattern Implementation
//!
//! # Interview Q&A
//!
//! Q: Repository 패턴이란?
//! A: 데이터 접근 로직을 추상화하는 패턴
//!
//!    장점:
//!    - 핸들러 로직과 데이터 접근 분리
//!    - 테스트 시 실제 DB 없이 in-memory 구현으로 교체
//!
//!    ```rust,ignore
//!    // Handler 레이어
//!    let questions = state.db.questions_by_category(id).await?;
//!
//!    // PostgreSQL 구현: db/mod.rs의 Database
//!    impl QuestionRepository for Database { ... }
//!
//!    // 테스트용: mock::MemoryRepository
//!    impl QuestionRepository for MemoryRepository { ... }
//!    ```

use async_trait::async_trait;
use anyhow::Result;

use super::models::{Category, NewQuestion, Question};

/// 문제/카테고리 저장소 인터페이스
///
/// 모든 목록은 id 오름차순으로 반환
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// 연결 상태 확인
    async fn health_check(&self) -> Result<()>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// 전체 문제 수
    async fn count_questions(&self) -> Result<i64>;

    /// offset/limit 페이지와 전체 문제 수
    async fn page_questions(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64)>;

    /// 대소문자 무시 부분 문자열 검색 (question 텍스트 기준)
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>>;

    /// 존재하지 않는 카테고리를 참조하면 실패
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question>;

    /// 삭제된 행이 있으면 true
    async fn delete_question(&self, id: i32) -> Result<bool>;
}
