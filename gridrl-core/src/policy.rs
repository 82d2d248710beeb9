//! Greedy action selection with a random tie-break.
use crate::{ActionValueTable, GridPos, Move};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Greedy policy over an [`ActionValueTable`].
///
/// Selects the move with the largest estimate, scanning in [`Move::ALL`]
/// order so the first maximum wins. If the selected estimate is exactly 0,
/// a uniformly random move is returned instead. Estimates are never negative
/// under the reward and update rules of this crate, so a 0 maximum means all
/// four estimates are 0; without the random fallback the agent would always
/// leave symmetric, unvisited states in the same direction.
pub struct GreedyPolicy {
    rng: StdRng,
}

impl GreedyPolicy {
    /// Constructs the policy with a seeded random number generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selects a move for the state `pos` given the current estimates.
    pub fn select(&mut self, table: &ActionValueTable, pos: GridPos) -> Move {
        let values = table.values(pos);

        let mut best = Move::ALL[0];
        for &m in &Move::ALL[1..] {
            if values[m.index()] > values[best.index()] {
                best = m;
            }
        }

        if values[best.index()] == 0.0 {
            Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
        } else {
            best
        }
    }
}
