//! Common Types Module
//!
//! 애플리케이션 전반에서 사용되는 공통 타입 정의

use serde::{Deserialize, Serialize};

/// 성공 응답 봉투
///
/// payload 필드를 최상위로 펼쳐서 `{ "success": true, ...payload }` 형태로 직렬화
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// 숫자 또는 숫자 문자열
///
/// 웹 클라이언트는 `"category": "3"`과 `"category": 3`을 섞어서 보냄
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    /// i32 범위의 정수로 해석 (실패 시 None)
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            NumberOrString::Number(n) => i32::try_from(*n).ok(),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}
