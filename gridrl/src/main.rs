//! Train Q-learning and SARSA agents in the stochastic grid world and
//! export their learning curves as CSV.
use anyhow::Result;
use clap::{Parser, ValueEnum};
use gridrl_core::{
    record::CsvRecorder, Agent, Evaluator, GreedyEvaluator, GridWorld, GridWorldConfig, QLearning,
    QLearningConfig, Sarsa, SarsaConfig, Trainer, TrainerConfig,
};
use log::info;
use std::path::Path;

const GRID_SIZE: usize = 50;
const SUCCESS_PROBABILITY: f32 = 0.9;
const ALPHA: f32 = 0.1;
const GAMMA: f32 = 0.95;
const EPISODES: usize = 10_000;
// Same value as SUCCESS_PROBABILITY in the reference configuration
const GREEDY_PROB: f32 = 0.9;
const PROGRESS_INTERVAL: usize = 100;
const EVAL_MAX_STEPS: usize = 10_000;

/// Train tabular agents in a stochastic grid world
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Algorithm to run
    #[arg(long, value_enum, default_value = "both")]
    algo: Algo,

    /// Number of training episodes
    #[arg(long, default_value_t = EPISODES)]
    episodes: usize,

    /// Number of cells along one side of the grid
    #[arg(long, default_value_t = GRID_SIZE)]
    grid_size: usize,

    /// Base random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory where learning-curve CSV files are written
    #[arg(long, default_value = "results")]
    out_dir: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    QLearning,
    Sarsa,
    Both,
}

fn env_config(args: &Args) -> GridWorldConfig {
    GridWorldConfig::default()
        .grid_size(args.grid_size)
        .success_probability(SUCCESS_PROBABILITY)
}

fn trainer_config(args: &Args) -> TrainerConfig {
    TrainerConfig::default()
        .episodes(args.episodes)
        .progress_interval(PROGRESS_INTERVAL)
        .seed(fastrand::i64(..))
}

/// Trains one agent, writes its learning curve, and logs a greedy rollout.
fn run<A: Agent<GridWorld>>(args: &Args, mut agent: A, curve_file: &str) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)?;
    let mut recorder = CsvRecorder::new(Path::new(&args.out_dir).join(curve_file))?;
    let mut trainer = Trainer::build(trainer_config(args), env_config(args))?;

    let results = trainer.train(&mut agent, &mut recorder)?;
    if let Some(last) = results.last() {
        info!("{}: final episode efficiency {:.4}", agent.name(), last);
    }

    let mut evaluator = GreedyEvaluator::new(&env_config(args), fastrand::i64(..), EVAL_MAX_STEPS)?;
    let record = evaluator.evaluate(&mut agent)?;
    info!(
        "{}: greedy rollout reached the goal in {} moves",
        agent.name(),
        record.get_scalar("eval_moves")?
    );
    Ok(())
}

fn run_q_learning(args: &Args) -> Result<()> {
    let config = QLearningConfig::default()
        .grid_size(args.grid_size)
        .alpha(ALPHA)
        .gamma(GAMMA)
        .seed(fastrand::u64(..));
    run(args, QLearning::build(config)?, "q_learning.csv")
}

fn run_sarsa(args: &Args) -> Result<()> {
    let config = SarsaConfig::default()
        .grid_size(args.grid_size)
        .alpha(ALPHA)
        .gamma(GAMMA)
        .greedy_prob(GREEDY_PROB)
        .seed(fastrand::u64(..));
    run(args, Sarsa::build(config)?, "sarsa.csv")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    fastrand::seed(args.seed);

    match args.algo {
        Algo::QLearning => run_q_learning(&args)?,
        Algo::Sarsa => run_sarsa(&args)?,
        Algo::Both => {
            run_q_learning(&args)?;
            run_sarsa(&args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_grid_world_training() -> Result<()> {
        let tmp_dir = TempDir::new("gridrl")?;
        let out_dir = match tmp_dir.as_ref().to_str() {
            Some(s) => s.to_string(),
            None => panic!("Failed to get string of temporary directory"),
        };
        let args = Args {
            algo: Algo::Both,
            episodes: 50,
            grid_size: 4,
            seed: 7,
            out_dir,
        };
        fastrand::seed(args.seed);

        run_q_learning(&args)?;
        run_sarsa(&args)?;

        for curve in ["q_learning.csv", "sarsa.csv"] {
            let path = tmp_dir.path().join(curve);
            let contents = std::fs::read_to_string(&path)?;
            // header plus one row per episode
            assert_eq!(contents.lines().count(), args.episodes + 1);
        }
        Ok(())
    }
}
