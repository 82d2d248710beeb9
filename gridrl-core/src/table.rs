//! Tabular action-value estimates.
use crate::{GridPos, Move};

/// Action-value estimates `Q(s, a)` for every cell of a square grid.
///
/// Each cell holds one `f32` per move, stored in the order of [`Move::ALL`]
/// and initialized to 0. The fixed layout guarantees that every
/// (state, action) pair exists from construction; no entry is ever created
/// lazily.
pub struct ActionValueTable {
    grid_size: usize,
    values: Vec<[f32; 4]>,
}

impl ActionValueTable {
    /// Creates a zero-initialized table for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            values: vec![[0.0; 4]; grid_size * grid_size],
        }
    }

    /// Number of cells along one side of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn index(&self, pos: GridPos) -> usize {
        debug_assert!(pos.x < self.grid_size && pos.y < self.grid_size);
        pos.y * self.grid_size + pos.x
    }

    /// The estimates of all four moves at `pos`, in [`Move::ALL`] order.
    pub fn values(&self, pos: GridPos) -> &[f32; 4] {
        &self.values[self.index(pos)]
    }

    /// The estimate of taking `m` at `pos`.
    pub fn get(&self, pos: GridPos, m: Move) -> f32 {
        self.values[self.index(pos)][m.index()]
    }

    /// Overwrites the estimate of taking `m` at `pos`.
    pub fn set(&mut self, pos: GridPos, m: Move, value: f32) {
        let ix = self.index(pos);
        self.values[ix][m.index()] = value;
    }

    /// The largest estimate at `pos`.
    pub fn best(&self, pos: GridPos) -> f32 {
        let vs = self.values(pos);
        vs.iter().fold(vs[0], |m, v| v.max(m))
    }

    /// The mean estimate over all four moves at `pos`.
    pub fn mean(&self, pos: GridPos) -> f32 {
        self.values(pos).iter().sum::<f32>() / 4.0
    }
}
