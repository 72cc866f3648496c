//! Database Models
//!
//! Row types for the two trivia tables. Both serialize directly into the
//! JSON shapes the web client expects.

use serde::Serialize;
use sqlx::FromRow;

/// 퀴즈 문제
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,

    /// categories.id 참조 (FK)
    pub category: i32,

    /// 난이도 (1~5 정도의 작은 서수)
    pub difficulty: i32,
}

/// 카테고리
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,

    /// 카테고리 이름 (예: "Science")
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// 새 문제 (id는 저장소가 부여)
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
