//! Tabular learning agents.
mod q_learning;
mod sarsa;
pub use q_learning::{QLearning, QLearningConfig};
pub use sarsa::{Sarsa, SarsaConfig};
