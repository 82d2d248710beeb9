#![warn(missing_docs)]
//! A library for tabular reinforcement learning in a stochastic grid world.
//!
//! An agent starts in the bottom-left corner of a square grid and learns to
//! reach the top-right corner. Moves succeed with a configurable probability;
//! otherwise a uniformly random direction is executed instead. Two tabular
//! algorithms are provided: off-policy Q-learning ([`QLearning`]) and an
//! on-policy expected-update variant of SARSA ([`Sarsa`]). The [`Trainer`]
//! runs the shared episode loop and emits one efficiency value
//! (`1 / moves to goal`) per episode through a [`Recorder`](record::Recorder).
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Agent, Env, Obs, Step, Transition};

mod gridworld;
pub use gridworld::{GridPos, GridWorld, GridWorldConfig, Move};

mod table;
pub use table::ActionValueTable;

mod policy;
pub use policy::GreedyPolicy;

mod agent;
pub use agent::{QLearning, QLearningConfig, Sarsa, SarsaConfig};

mod trainer;
pub use trainer::{Trainer, TrainerConfig};

mod evaluator;
pub use evaluator::{Evaluator, GreedyEvaluator};
