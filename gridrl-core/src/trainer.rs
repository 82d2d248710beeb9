//! Train [`Agent`].
mod config;
use crate::{
    record::{Record, RecordValue::Scalar, Recorder},
    Agent, Env, Transition,
};
use anyhow::Result;
pub use config::TrainerConfig;
use log::{info, warn};

/// Manages the episode loop shared by all agents.
///
/// One call to [`Trainer::train`] runs a full learning experiment:
///
/// 1. Build the environment from its configuration and the trainer's seed.
/// 2. For each episode: reset the environment, then repeat
///    select action → step → update the agent's table until the goal is
///    reached.
/// 3. Record the episode's efficiency, `1 / moves to goal`, through the
///    given [`Recorder`], and collect it into the returned sequence.
///
/// Episodes run strictly in sequence; each one depends on the table state
/// left by the previous one. Progress is logged every `progress_interval`
/// episodes.
///
/// An episode has no step cap unless `max_steps_per_episode` is set. The cap
/// is a diagnostic guard for pathological configurations: when it fires, the
/// episode is cut short with a warning and recorded with the moves taken so
/// far, without touching the learning semantics of completed episodes.
pub struct Trainer<E: Env> {
    /// Configuration of the environment.
    env_config: E::Config,

    /// Number of episodes to run.
    episodes: usize,

    /// Interval of progress logs in episodes.
    progress_interval: usize,

    /// Interval of flushing the recorder in episodes.
    flush_record_interval: usize,

    /// Optional diagnostic cap on moves per episode.
    max_steps_per_episode: Option<usize>,

    /// Seed of the environment's random number generator.
    seed: i64,
}

impl<E: Env> Trainer<E> {
    /// Constructs a trainer.
    ///
    /// Fails if the configuration is invalid, e.g. a zero interval.
    pub fn build(config: TrainerConfig, env_config: E::Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            env_config,
            episodes: config.episodes,
            progress_interval: config.progress_interval,
            flush_record_interval: config.flush_record_interval,
            max_steps_per_episode: config.max_steps_per_episode,
            seed: config.seed,
        })
    }

    /// Runs a single episode and returns the number of moves taken.
    fn episode<A: Agent<E>>(&self, env: &mut E, agent: &mut A) -> Result<usize> {
        let mut obs = env.reset()?;
        let mut moves = 0;

        loop {
            let act = agent.sample(&obs);
            let (step, _) = env.step(&act);
            moves += 1;

            agent.update(&Transition {
                obs,
                act: step.act,
                next_obs: step.obs.clone(),
                reward: step.reward,
            });
            obs = step.obs;

            if step.is_terminated {
                break;
            }
            if let Some(cap) = self.max_steps_per_episode {
                if moves >= cap {
                    warn!("{}: episode truncated after {} moves", agent.name(), moves);
                    break;
                }
            }
        }

        Ok(moves)
    }

    /// Trains the agent and returns the per-episode efficiency sequence.
    ///
    /// The returned vector has one entry per episode: `1 / moves to goal`,
    /// higher is better, approaching 1 for a direct path.
    pub fn train<A: Agent<E>>(
        &mut self,
        agent: &mut A,
        recorder: &mut dyn Recorder,
    ) -> Result<Vec<f32>> {
        let mut env = E::build(&self.env_config, self.seed)?;
        let mut results = Vec::with_capacity(self.episodes);

        for episode in 0..self.episodes {
            if episode % self.progress_interval == 0 {
                info!("{}: episode {}", agent.name(), episode);
            }

            let moves = self.episode(&mut env, agent)?;
            let inv_moves = 1.0 / moves as f32;
            results.push(inv_moves);

            let mut record = Record::empty();
            record.insert("episode", Scalar(episode as f32));
            record.insert("inv_moves", Scalar(inv_moves));
            recorder.write(record);

            if (episode + 1) % self.flush_record_interval == 0 {
                recorder.flush();
            }
        }
        recorder.flush();

        Ok(results)
    }
}
