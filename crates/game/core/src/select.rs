//! Weighted random selection.
//!
//! The single source of "who gets chosen" semantics: give-away and steal
//! targets, flip/trash/santa targets, and joker pair selection all go
//! through [`select_weighted`].

use crate::env::GameEnv;

/// Draws one candidate from a weight-expanded pool.
///
/// Each candidate appears `max(1, weight(c))` times in the pool and the
/// draw is uniform over the pool, so heavier candidates are proportionally
/// more likely. Returns the index into `candidates`, or `None` when the
/// slice is empty.
pub fn select_weighted<T, F>(
    env: &GameEnv<'_>,
    context: u32,
    candidates: &[T],
    weight: F,
) -> Option<usize>
where
    F: Fn(&T) -> usize,
{
    if candidates.is_empty() {
        return None;
    }

    let mut pool = Vec::new();
    for (idx, candidate) in candidates.iter().enumerate() {
        let copies = weight(candidate).max(1);
        pool.extend(std::iter::repeat(idx).take(copies));
    }

    Some(pool[env.pick_index(context, pool.len())])
}
