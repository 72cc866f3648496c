//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `quiz`: 다음 퀴즈 문제 선택

mod quiz;

pub use quiz::{select_next_question, ANY_CATEGORY};
