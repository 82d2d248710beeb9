//! End-to-end learning runs on a small deterministic grid.
use anyhow::Result;
use gridrl_core::{
    record::NullRecorder, Agent, Evaluator, GreedyEvaluator, GridPos, GridWorld, GridWorldConfig,
    Move, QLearning, QLearningConfig, Sarsa, SarsaConfig, Trainer, TrainerConfig,
};

const GRID_SIZE: usize = 3;
const EPISODES: usize = 5000;
const EVAL_MAX_STEPS: usize = 100;

fn env_config() -> GridWorldConfig {
    GridWorldConfig::default()
        .grid_size(GRID_SIZE)
        .success_probability(1.0)
}

fn trainer() -> Result<Trainer<GridWorld>> {
    let config = TrainerConfig::default()
        .episodes(EPISODES)
        .progress_interval(1000)
        .seed(1);
    Trainer::build(config, env_config())
}

#[test]
fn q_learning_converges_to_shortest_path() -> Result<()> {
    let config = QLearningConfig::default()
        .grid_size(GRID_SIZE)
        .alpha(0.5)
        .gamma(0.9)
        .seed(2);
    let mut agent = QLearning::build(config)?;

    let results = trainer()?.train(&mut agent, &mut NullRecorder {})?;
    assert_eq!(results.len(), EPISODES);

    // The greedy rollout walks corner to corner in exactly 2 * grid_max moves
    let mut evaluator = GreedyEvaluator::new(&env_config(), 3, EVAL_MAX_STEPS)?;
    let record = evaluator.evaluate(&mut agent)?;
    assert_eq!(record.get_scalar("eval_moves")?, (2 * (GRID_SIZE - 1)) as f32);

    // Estimates stay finite and non-negative everywhere; the goal reward of 1
    // bounds every entry from above
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            for m in Move::ALL {
                let v = agent.table().get(GridPos { x, y }, m);
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
    Ok(())
}

#[test]
fn sarsa_with_full_greedy_prob_converges_to_shortest_path() -> Result<()> {
    let config = SarsaConfig::default()
        .grid_size(GRID_SIZE)
        .alpha(0.5)
        .gamma(0.9)
        .greedy_prob(1.0)
        .seed(2);
    let mut agent = Sarsa::build(config)?;

    let results = trainer()?.train(&mut agent, &mut NullRecorder {})?;
    assert_eq!(results.len(), EPISODES);
    // Every recorded efficiency is 1 / moves for a completed episode
    assert!(results.iter().all(|r| *r > 0.0 && *r <= 1.0));

    let mut evaluator = GreedyEvaluator::new(&env_config(), 3, EVAL_MAX_STEPS)?;
    let record = evaluator.evaluate(&mut agent)?;
    assert_eq!(record.get_scalar("eval_moves")?, (2 * (GRID_SIZE - 1)) as f32);
    Ok(())
}
