//! Tabular Q-learning.
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

/// Configuration of [`QLearning`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct QLearningConfig {
    /// Number of cells along one side of the grid.
    pub grid_size: usize,

    /// Learning rate.
    pub alpha: f32,

    /// Discount factor.
    pub gamma: f32,

    /// Seed of the policy's random number generator.
    pub seed: u64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            alpha: 0.1,
            gamma: 0.95,
            seed: 0,
        }
    }
}

impl QLearningConfig {
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
        if !(0.0..=1.0).contains(&self.alpha) || !(0.0..=1.0).contains(&self.gamma) {
            return Err(
                GridRlError::InvalidConfig("alpha and gamma must be in [0, 1]".into()).into(),
            );
        }
        Ok(())
    }

    /// Constructs [`QLearningConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`QLearningConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// Off-policy tabular Q-learning.
///
/// Bootstraps from the best estimate at the next state, regardless of the
/// action the policy will take there:
///
/// ```text
/// target = r + gamma * max_a' Q(s', a')
/// Q(s, a) += alpha * (target - Q(s, a))
/// ```
///
/// The entry updated is the action that was actually executed, which may
/// differ from the intended one when the environment overrides it. The table
/// learns the value of the outcome experienced, not of the intention.
pub struct QLearning {
    alpha: f32,
    gamma: f32,
    table: ActionValueTable,
    policy: GreedyPolicy,
}

impl QLearning {
    /// The learned action-value estimates.
    pub fn table(&self) -> &ActionValueTable {
        &self.table
    }
}

impl Agent<GridWorld> for QLearning {
    type Config = QLearningConfig;

    fn build(config: Self::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            gamma: config.gamma,
            table: ActionValueTable::new(config.grid_size),
            policy: GreedyPolicy::new(config.seed),
        })
    }

    fn sample(&mut self, obs: &GridPos) -> Move {
        self.policy.select(&self.table, *obs)
    }

    fn update(&mut self, t: &Transition<GridWorld>) -> f32 {
        let target = t.reward + self.gamma * self.table.best(t.next_obs);
        let q = self.table.get(t.obs, t.act);
        let td_err = target - q;
        self.table.set(t.obs, t.act, q + self.alpha * td_err);
        td_err
    }

    fn name(&self) -> &'static str {
        "Q-Learning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_moves_entry_toward_bootstrap_target() {
        let config = QLearningConfig::default()
            .grid_size(3)
            .alpha(0.5)
            .gamma(0.9);
        let mut agent = QLearning::build(config).unwrap();

        let obs = GridPos { x: 0, y: 0 };
        let next_obs = GridPos { x: 1, y: 0 };
        agent.table.set(next_obs, Move::Right, 0.6);
        agent.table.set(next_obs, Move::Up, 0.2);

        let td_err = agent.update(&Transition {
            obs,
            act: Move::Right,
            next_obs,
            reward: 0.0,
        });

        // target = 0 + 0.9 * 0.6; entry moves halfway there from 0
        assert_eq!(td_err, 0.9 * 0.6);
        assert_eq!(agent.table.get(obs, Move::Right), 0.5 * 0.9 * 0.6);
    }

    #[test]
    fn goal_transition_uses_reward_one() {
        let config = QLearningConfig::default()
            .grid_size(2)
            .alpha(1.0)
            .gamma(0.9);
        let mut agent = QLearning::build(config).unwrap();

        let obs = GridPos { x: 0, y: 1 };
        let goal = GridPos { x: 1, y: 1 };
        let td_err = agent.update(&Transition {
            obs,
            act: Move::Right,
            next_obs: goal,
            reward: 1.0,
        });

        assert_eq!(td_err, 1.0);
        assert_eq!(agent.table.get(obs, Move::Right), 1.0);
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let config = QLearningConfig::default().alpha(1.5);
        assert!(QLearning::build(config).is_err());
    }
}
