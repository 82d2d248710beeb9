//! SARSA with an expected bootstrap target.
use crate::{
    error::GridRlError, ActionValueTable, Agent, GreedyPolicy, GridPos, GridWorld, Move, Transition,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Sarsa`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct SarsaConfig {
    /// Number of cells along one side of the grid.
    pub grid_size: usize,

    /// Learning rate.
    pub alpha: f32,

    /// Discount factor.
    pub gamma: f32,

    /// Assumed probability of acting greedily at the next state.
    pub greedy_prob: f32,

    /// Seed of the policy's random number generator.
    pub seed: u64,
}

impl Default for SarsaConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            alpha: 0.1,
            gamma: 0.95,
            greedy_prob: 0.9,
            seed: 0,
        }
    }
}

impl SarsaConfig {
    /// Sets the grid size.
    pub fn grid_size(mut self, v: usize) -> Self {
        self.grid_size = v;
        self
    }

    /// Sets the learning rate.
    pub fn alpha(mut self, v: f32) -> Self {
        self.alpha = v;
        self
    }

    /// Sets the discount factor.
    pub fn gamma(mut self, v: f32) -> Self {
        self.gamma = v;
        self
    }

    /// Sets the assumed probability of acting greedily at the next state.
    pub fn greedy_prob(mut self, v: f32) -> Self {
        self.greedy_prob = v;
        self
    }

    /// Sets the seed of the policy's random number generator.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Checks that the parameters are in their valid ranges.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 1 {
            return Err(GridRlError::InvalidConfig("grid_size must be >= 1".into()).into());
        }
        if !(0.0..=1.0).contains(&self.alpha)
            || !(0.0..=1.0).contains(&self.gamma)
            || !(0.0..=1.0).contains(&self.greedy_prob)
        {
            return Err(GridRlError::InvalidConfig(
                "alpha, gamma and greedy_prob must be in [0, 1]".into(),
            )
            .into());
        }
        Ok(())
    }

    /// Constructs [`SarsaConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SarsaConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// On-policy tabular learning with an expected bootstrap target.
///
/// Instead of bootstrapping from the single action that will actually be
/// taken next (textbook SARSA), the target blends the best estimate at the
/// next state with the mean over all four, weighted by the assumed
/// probability `p` of following the greedy policy:
///
/// ```text
/// target = r + gamma * (p * max_a' Q(s', a') + (1 - p) * mean_a' Q(s', a'))
/// Q(s, a) += alpha * (target - Q(s, a))
/// ```
///
/// `p` is a fixed coefficient, not learned. With `p = 1` the target equals
/// Q-learning's. As in [`QLearning`](super::QLearning), the executed action's
/// entry is the one updated.
pub struct Sarsa {
    alpha: f32,
    gamma: f32,
    greedy_prob: f32,
    table: ActionValueTable,
    policy: GreedyPolicy,
}

impl Sarsa {
    /// The learned action-value estimates.
    pub fn table(&self) -> &ActionValueTable {
        &self.table
    }
}

impl Agent<GridWorld> for Sarsa {
    type Config = SarsaConfig;

    fn build(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            gamma: config.gamma,
            greedy_prob: config.greedy_prob,
            table: ActionValueTable::new(config.grid_size),
            policy: GreedyPolicy::new(config.seed),
        })
    }

    fn sample(&mut self, obs: &GridPos) -> Move {
        self.policy.select(&self.table, *obs)
    }

    fn update(&mut self, t: &Transition<GridWorld>) -> f32 {
        let expected = self.greedy_prob * self.table.best(t.next_obs)
            + (1.0 - self.greedy_prob) * self.table.mean(t.next_obs);
        let target = t.reward + self.gamma * expected;
        let q = self.table.get(t.obs, t.act);
        let td_err = target - q;
        self.table.set(t.obs, t.act, q + self.alpha * td_err);
        td_err
    }

    fn name(&self) -> &'static str {
        "SARSA"
    }
}
