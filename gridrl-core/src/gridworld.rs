//! A stochastic grid-world environment.
mod config;
use crate::{record::Record, Act, Env, Obs, Step};
use anyhow::Result;
pub use config::GridWorldConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A move on the grid.
///
/// These are the only actions: there is no diagonal and no stay action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Increase the y coordinate.
    Up,

    /// Decrease the y coordinate.
    Down,

    /// Increase the x coordinate.
    Right,

    /// Decrease the x coordinate.
    Left,
}

impl Move {
    /// All moves, in the order used for table indexing and argmax scans.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    /// Index of the move in [`Move::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Move::Up => 0,
            Move::Down => 1,
            Move::Right => 2,
            Move::Left => 3,
        }
    }
}

impl Act for Move {}

/// Position of the agent on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    /// Horizontal coordinate, in `[0, grid_max]`.
    pub x: usize,

    /// Vertical coordinate, in `[0, grid_max]`.
    pub y: usize,
}

impl Obs for GridPos {}

/// A square grid with a goal in the top-right corner.
///
/// The agent starts in the bottom-left corner `(0, 0)`. Each step executes
/// the intended move with probability `success_probability`; otherwise a
/// uniformly random move, possibly the intended one, is executed instead.
/// Moves beyond a boundary leave the position unchanged. Reaching the goal
/// `(grid_max, grid_max)` yields reward 1 and terminates the episode; every
/// other step yields reward 0.
pub struct GridWorld {
    grid_max: usize,
    success_probability: f32,
    x: usize,
    y: usize,
    rng: StdRng,
}

impl GridWorld {
    /// The goal position `(grid_max, grid_max)`.
    pub fn goal(&self) -> GridPos {
        GridPos {
            x: self.grid_max,
            y: self.grid_max,
        }
    }

    /// Current position of the agent.
    pub fn pos(&self) -> GridPos {
        GridPos { x: self.x, y: self.y }
    }

    fn apply(&mut self, m: Move) {
        match m {
            Move::Up => {
                if self.y < self.grid_max {
                    self.y += 1;
                }
            }
            Move::Down => {
                if self.y > 0 {
                    self.y -= 1;
                }
            }
            Move::Right => {
                if self.x < self.grid_max {
                    self.x += 1;
                }
            }
            Move::Left => {
                if self.x > 0 {
                    self.x -= 1;
                }
            }
        }
        debug_assert!(self.x <= self.grid_max && self.y <= self.grid_max);
    }
}

impl Env for GridWorld {
    type Config = GridWorldConfig;
    type Obs = GridPos;
    type Act = Move;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid_max: config.grid_size - 1,
            success_probability: config.success_probability,
            x: 0,
            y: 0,
            rng: StdRng::seed_from_u64(seed as u64),
        })
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        // Override the intended move with probability 1 - success_probability.
        // The random draw may pick the intended move again.
        let act = if self.rng.gen::<f32>() < self.success_probability {
            *a
        } else {
            Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
        };

        self.apply(act);

        let is_terminated = self.pos() == self.goal();
        let reward = if is_terminated { 1.0 } else { 0.0 };
        let step = Step::new(self.pos(), act, reward, is_terminated);

        (step, Record::empty())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.x = 0;
        self.y = 0;
        Ok(self.pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deterministic(grid_size: usize) -> GridWorld {
        let config = GridWorldConfig::default()
            .grid_size(grid_size)
            .success_probability(1.0);
        GridWorld::build(&config, 42).unwrap()
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut env = deterministic(3);

        let (step, _) = env.step(&Move::Left);
        assert_eq!(step.obs, GridPos { x: 0, y: 0 });
        assert_eq!(step.act, Move::Left);
        assert_eq!(step.reward, 0.0);
        assert!(!step.is_terminated);

        let (step, _) = env.step(&Move::Down);
        assert_eq!(step.obs, GridPos { x: 0, y: 0 });
    }

    #[test]
    fn deterministic_path_reaches_goal() {
        let mut env = deterministic(3);

        for (m, terminated) in [
            (Move::Right, false),
            (Move::Right, false),
            (Move::Up, false),
            (Move::Up, true),
        ] {
            let (step, _) = env.step(&m);
            assert_eq!(step.act, m);
            assert_eq!(step.is_terminated, terminated);
            assert_eq!(step.reward, if terminated { 1.0 } else { 0.0 });
        }
        assert_eq!(env.pos(), env.goal());
    }

    #[test]
    fn reset_returns_to_initial_position() {
        let mut env = deterministic(3);
        env.step(&Move::Right);
        env.step(&Move::Up);

        let obs = env.reset().unwrap();
        assert_eq!(obs, GridPos { x: 0, y: 0 });
    }

    #[test]
    fn position_stays_in_bounds_under_random_moves() {
        // success_probability 0 makes every executed move a random draw
        let config = GridWorldConfig::default()
            .grid_size(4)
            .success_probability(0.0);
        let mut env = GridWorld::build(&config, 7).unwrap();

        for _ in 0..1000 {
            let (step, _) = env.step(&Move::Up);
            assert!(step.obs.x <= 3 && step.obs.y <= 3);
            if step.is_terminated {
                env.reset().unwrap();
            }
        }
    }

    #[test]
    fn goal_reached_iff_position_is_goal() {
        let mut env = deterministic(2);
        let (step, _) = env.step(&Move::Right);
        assert!(!step.is_terminated);
        let (step, _) = env.step(&Move::Up);
        assert!(step.is_terminated);
        assert_eq!(step.reward, 1.0);
        assert_eq!(step.obs, GridPos { x: 1, y: 1 });
    }
}
