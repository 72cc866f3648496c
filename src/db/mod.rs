//! Database Module
//!
//! # Interview Q&A
//!
//! Q: SQLx를 선택한 이유는?
//! A: async 네이티브 PostgreSQL 드라이버
//!    - tokio 런타임과 자연스럽게 통합
//!    - `FromRow` derive로 행 → 구조체 매핑
//!    - 커넥션 풀 내장
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 PgPool 사용
//!    - 최대 커넥션 수는 설정값 (DB_MAX_CONNECTIONS)
//!    - 커넥션 재사용 (오버헤드 감소)
//!    - acquire 타임아웃 처리
//!
//! Q: 마이그레이션 도구는?
//! A: 사용하지 않음. 테이블 두 개뿐이라 시작 시 `CREATE TABLE IF NOT EXISTS`로 충분

mod models;
mod repository;

pub use models::*;
pub use repository::QuestionRepository;

#[cfg(test)]
pub use repository::mock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// PostgreSQL 기반 저장소
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 설정값 (기본 10)
    /// - min_connections: 1 (idle 시 최소 유지)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect(database_url)
            .await
            .context("failed to connect to PostgreSQL")?;

        Ok(Self { pool })
    }

    /// 테이블 생성 (없을 때만)
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id SERIAL PRIMARY KEY,
                type TEXT NOT NULL
            )
            "#
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id SERIAL PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL REFERENCES categories (id),
                difficulty INTEGER NOT NULL
            )
            "#
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// ILIKE 와일드카드 이스케이프
///
/// 검색어는 리터럴 부분 문자열로 취급 (`%`, `_`, `\` 자체를 검색 가능)
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionRepository for Database {
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn count_questions(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn page_questions(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64)> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((questions, self.count_questions().await?))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
