//! Quiz question selection
//!
//! `select_next` is a pure function of the candidate pool, the caller's quiz
//! state and a random source. It never returns an id from
//! `state.asked_ids`, and reports [`QuizOutcome::Exhausted`] exactly when no
//! unseen candidate remains in scope.

use crate::models::{Question, QuizOutcome, QuizScope, QuizState};
use crate::services::filters::by_category;
use rand::seq::SliceRandom;
use rand::Rng;

/// Candidates in scope that have not been asked yet, in source order
pub fn unseen_pool(pool: Vec<Question>, state: &QuizState) -> Vec<Question> {
    let in_scope = match state.scope {
        QuizScope::All => pool,
        QuizScope::Category(category_id) => by_category(pool, category_id),
    };

    in_scope
        .into_iter()
        .filter(|question| !state.asked_ids.contains(&question.id))
        .collect()
}

/// Draw the next question uniformly at random from the unseen pool.
///
/// Pass a seeded `StdRng` to make the draw reproducible.
pub fn select_next<R: Rng + ?Sized>(
    pool: Vec<Question>,
    state: &QuizState,
    rng: &mut R,
) -> QuizOutcome {
    let available = unseen_pool(pool, state);

    match available.choose(rng) {
        Some(question) => QuizOutcome::Next {
            question: question.clone(),
            available,
        },
        None => QuizOutcome::Exhausted,
    }
}
