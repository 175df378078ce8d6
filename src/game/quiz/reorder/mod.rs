use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::quiz::definition::{Difficulty, Question};


/// Moves questions of the `target` difficulty to the front of `tail`.
/// Order within each group is randomized on every call.
pub fn reorder<R: Rng + ?Sized>(tail: &mut [Question], target: Difficulty, rng: &mut R) {
    if tail.is_empty() {
        return;
    }
    tail.shuffle(rng);
    // Stable, so the shuffled order survives inside each group
    tail.sort_by_key(|q| q.difficulty() != target);
}
