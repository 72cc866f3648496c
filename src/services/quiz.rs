//! Quiz Question Selector
//!
//! # Interview Q&A
//!
//! Q: "이미 낸 문제 제외 + 무작위 선택"을 어떻게 구현하는가?
//! A: 먼저 거르고, 한 번만 뽑는다 (filter-then-sample)
//!
//!    ```text
//!    eligible = candidates - { q | q.id ∈ excluded }
//!    eligible 비었음 → None (소진)
//!    아니면        → eligible[uniform(0..len)]
//!    ```
//!
//!    - 시간: O(후보 수), 재시도 루프 없음
//!    - 남은 후보가 1개뿐이어도 한 번에 선택
//!
//! Q: 무작위 인덱스를 뽑고 이미 낸 문제면 다시 뽑는 방식은?
//! A: 남은 후보가 0개면 영원히 끝나지 않고,
//!    거의 소진된 풀에서는 재시도 횟수가 기하급수적으로 늘어남
//!
//! Q: 난수원을 인자로 받는 이유는?
//! A: 테스트에서 `StdRng::seed_from_u64`로 결정적 검증 가능

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// 퀴즈 카테고리 id 0 = 전체 카테고리
pub const ANY_CATEGORY: i32 = 0;

/// 다음 퀴즈 문제 선택
///
/// `excluded`에 없는 후보 중 하나를 균등 확률로 반환.
/// 후보가 없거나 모두 제외됐으면 `None` (퀴즈 종료).
pub fn select_next_question<'a, R>(
    candidates: &'a [Question],
    excluded: &HashSet<i32>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = candidates
        .iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    eligible.choose(rng).copied()
}
