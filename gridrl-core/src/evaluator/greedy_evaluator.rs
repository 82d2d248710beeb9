//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{record::Record, Agent, Env};
use anyhow::Result;

/// Rolls out the learned table on a fresh environment without updating it.
///
/// Runs a single episode by sampling from the agent and stepping the
/// environment, counting moves until the goal. `max_steps` bounds the
/// rollout so that a table without a path to the goal cannot loop forever;
/// a capped run reports `max_steps` as its move count.
pub struct GreedyEvaluator<E: Env> {
    /// The environment instance used for evaluation.
    env: E,

    /// Upper bound on moves in the rollout.
    max_steps: usize,
}

impl<E: Env> GreedyEvaluator<E> {
    /// Constructs a [`GreedyEvaluator`].
    pub fn new(config: &E::Config, seed: i64, max_steps: usize) -> Result<Self> {
        Ok(Self {
            env: E::build(config, seed)?,
            max_steps,
        })
    }
}

impl<E: Env> Evaluator<E> for GreedyEvaluator<E> {
    /// Runs one episode and returns the move count as `"eval_moves"`.
    fn evaluate<A: Agent<E>>(&mut self, agent: &mut A) -> Result<Record> {
        let mut obs = self.env.reset()?;
        let mut moves = 0;

        loop {
            let act = agent.sample(&obs);
            let (step, _) = self.env.step(&act);
            moves += 1;
            if step.is_terminated || moves >= self.max_steps {
                break;
            }
            obs = step.obs;
        }

        Ok(Record::from_scalar("eval_moves", moves as f32))
    }
}
