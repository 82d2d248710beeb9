//! Evaluate [`Agent`].
use crate::{record::Record, Agent, Env};
use anyhow::Result;
mod greedy_evaluator;
pub use greedy_evaluator::GreedyEvaluator;

/// Evaluate [`Agent`].
pub trait Evaluator<E: Env> {
    /// Evaluate [`Agent`].
    ///
    /// The agent's table is read but never updated during evaluation.
    fn evaluate<A: Agent<E>>(&mut self, agent: &mut A) -> Result<Record>;
}
